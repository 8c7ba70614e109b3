// Promotional clip lookup
// Static table keyed by the normalized event name; four bundled assets.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaClip {
    pub kind: MediaKind,
    pub asset: &'static str,
}

/// Lowercase the display name, strip spaces, and match exactly against the
/// known set. Unknown names have no media.
pub fn media_for_event(name: &str) -> Option<MediaClip> {
    let normalized: String = name.to_lowercase().replace(' ', "");
    let clip = match normalized.as_str() {
        "downtownmusicfest" => MediaClip {
            kind: MediaKind::Video,
            asset: "musicfest.mp4",
        },
        "foodcarnival" => MediaClip {
            kind: MediaKind::Video,
            asset: "foodcarnival.mp4",
        },
        "artexhibitspotlight" => MediaClip {
            kind: MediaKind::Video,
            asset: "artexhibit.mp4",
        },
        "funfair" => MediaClip {
            kind: MediaKind::Video,
            asset: "funfair.mp4",
        },
        "musicfest" => MediaClip {
            kind: MediaKind::Audio,
            asset: "musicfest.mp3",
        },
        _ => return None,
    };
    Some(clip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_clips() {
        let clip = media_for_event("Downtown Music Fest").expect("clip");
        assert_eq!(clip.kind, MediaKind::Video);
        assert_eq!(clip.asset, "musicfest.mp4");

        let clip = media_for_event("Music Fest").expect("clip");
        assert_eq!(clip.kind, MediaKind::Audio);
        assert_eq!(clip.asset, "musicfest.mp3");
    }

    #[test]
    fn normalization_ignores_case_and_spaces() {
        assert_eq!(
            media_for_event("  food   carnival "),
            media_for_event("FoodCarnival")
        );
        assert!(media_for_event("FUN FAIR").is_some());
    }

    #[test]
    fn unknown_names_have_no_media() {
        assert!(media_for_event("Art Walk").is_none());
        assert!(media_for_event("").is_none());
    }
}
