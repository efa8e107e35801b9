use std::borrow::Cow;

use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressStyle};

pub fn get_pb(len: u64, msg: impl Into<Cow<'static, str>>) -> Result<ProgressBar, TemplateError> {
    let pb = ProgressBar::new(len);

    let pb_style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed}] {msg} [{wide_bar:.cyan/blue}] ({pos}/{len}|{percent}%) ({per_sec}|{eta})",
        )?
        .progress_chars("#>-");
    pb.set_style(pb_style);
    pb.set_message(msg);
    pb.tick();

    Ok(pb)
}

/// Progress over `edges` follow edges, labelled with the edge in flight.
pub fn follow_pb(edges: u64) -> Result<ProgressBar, TemplateError> {
    get_pb(edges, "Following")
}

pub fn show_edge(pb: &ProgressBar, follower: &str, followee: &str) {
    pb.set_message(format!("Following {follower} -> {followee}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_bar_tracks_edge_count_and_current_edge() {
        let pb = follow_pb(3).unwrap();
        assert_eq!(pb.length(), Some(3));
        assert_eq!(pb.message(), "Following");

        show_edge(&pb, "Foo", "Bar");
        assert_eq!(pb.message(), "Following Foo -> Bar");
        pb.finish_and_clear();
    }
}
