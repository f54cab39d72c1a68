/// Link extraction and de-duplication for launch media fields
use crate::domain::LaunchLinks;
use std::collections::HashSet;

/// A labeled external link ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLink {
    pub label: &'static str,
    pub path: String,
}

/// Flatten a launch's link fields into an ordered, de-duplicated list.
///
/// Fields are visited in a fixed priority order and the first field to emit a
/// given path wins; later exact-string duplicates are dropped. The same video
/// is routinely stored under both `youtube_id` and `webcast`, so the derived
/// YouTube URL is considered first. Comparison is plain string equality, not
/// URL normalization.
///
/// Scalar fields contribute at most one entry each; only the `flickr` lists
/// expand to multiple entries, in list order.
pub fn populated_links(links: &LaunchLinks) -> Vec<MediaLink> {
    let mut out: Vec<MediaLink> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let mut push = |label: &'static str, path: String| {
        if seen.insert(path.clone()) {
            out.push(MediaLink { label, path });
        }
    };

    if let Some(id) = &links.youtube_id {
        push("YouTube", format!("https://www.youtube.com/watch?v={id}"));
    }
    if let Some(url) = &links.webcast {
        push("Webcast", url.clone());
    }
    if let Some(url) = &links.article {
        push("Article", url.clone());
    }
    if let Some(url) = &links.wikipedia {
        push("Wikipedia", url.clone());
    }
    if let Some(url) = &links.presskit {
        push("Press Kit", url.clone());
    }
    if let Some(patch) = &links.patch {
        if let Some(url) = &patch.small {
            push("Patch (Small)", url.clone());
        }
        if let Some(url) = &patch.large {
            push("Patch (Large)", url.clone());
        }
    }
    if let Some(reddit) = &links.reddit {
        if let Some(url) = &reddit.campaign {
            push("Reddit (Campaign)", url.clone());
        }
        if let Some(url) = &reddit.launch {
            push("Reddit (Launch)", url.clone());
        }
        if let Some(url) = &reddit.media {
            push("Reddit (Media)", url.clone());
        }
        if let Some(url) = &reddit.recovery {
            push("Reddit (Recovery)", url.clone());
        }
    }
    if let Some(flickr) = &links.flickr {
        for url in &flickr.small {
            push("Flickr (Small)", url.clone());
        }
        for url in &flickr.original {
            push("Flickr (Original)", url.clone());
        }
    }

    out
}
