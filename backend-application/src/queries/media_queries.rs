use backend_domain::{media_for_event, MediaClipBody, MediaQuery, MediaResponse};

use crate::AppError;

/// Resolves the promotional clip for an event name. Unknown names are not
/// an error; they simply carry no clip.
pub fn event_media(query: MediaQuery) -> Result<MediaResponse, AppError> {
    if query.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    let clip = media_for_event(&query.name).map(|clip| MediaClipBody {
        kind: match clip.kind {
            backend_domain::MediaKind::Video => "video".to_string(),
            backend_domain::MediaKind::Audio => "audio".to_string(),
        },
        asset: clip.asset.to_string(),
    });
    Ok(MediaResponse {
        name: query.name,
        clip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_event_resolves_to_a_clip() {
        let response = event_media(MediaQuery {
            name: "Fun Fair".to_string(),
        })
        .expect("media");
        let clip = response.clip.expect("clip");
        assert_eq!(clip.kind, "video");
        assert_eq!(clip.asset, "funfair.mp4");
    }

    #[test]
    fn unknown_event_resolves_to_no_clip() {
        let response = event_media(MediaQuery {
            name: "Night Market".to_string(),
        })
        .expect("media");
        assert!(response.clip.is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = event_media(MediaQuery {
            name: "  ".to_string(),
        })
        .expect_err("reject");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
