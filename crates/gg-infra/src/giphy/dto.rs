//! Wire format of the media API. Every field is optional here; records are
//! only built once all required references check out.

use gg_core::{MediaId, MediaRecord, ResourceError, ResourceRef};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PageEnvelope {
    #[serde(default)]
    pub data: Vec<GifDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GifDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub images: Option<ImagesDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImagesDto {
    #[serde(default)]
    pub original: Option<ImageDto>,
    #[serde(default)]
    pub fixed_height: Option<ImageDto>,
    #[serde(default)]
    pub fixed_height_still: Option<ImageDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageDto {
    #[serde(default)]
    pub url: Option<String>,
    /// Byte size, sent as a decimal string.
    #[serde(default)]
    pub size: Option<String>,
}

fn resource(variant: &'static str, image: Option<&ImageDto>) -> Result<ResourceRef, ResourceError> {
    let image = image.ok_or(ResourceError::Missing { variant })?;
    let url = image
        .url
        .as_deref()
        .ok_or(ResourceError::Missing { variant })?;
    let size = image.size.as_deref().and_then(|s| s.parse::<u64>().ok());
    ResourceRef::parse(variant, url, size)
}

impl TryFrom<GifDto> for MediaRecord {
    type Error = ResourceError;

    fn try_from(dto: GifDto) -> Result<Self, Self::Error> {
        let id = dto.id.filter(|id| !id.is_empty()).ok_or(ResourceError::MissingId)?;
        let images = dto.images.unwrap_or_default();

        MediaRecord::new(
            MediaId::from_string(id),
            resource("original", images.original.as_ref())?,
            resource("fixed_height", images.fixed_height.as_ref())?,
            resource("fixed_height_still", images.fixed_height_still.as_ref())?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Result<MediaRecord, ResourceError>> {
        let envelope: PageEnvelope = serde_json::from_str(json).unwrap();
        envelope.data.into_iter().map(MediaRecord::try_from).collect()
    }

    #[test]
    fn complete_object_becomes_record() {
        let records = parse(
            r#"{"data":[{"id":"abc","type":"gif","images":{
                "original":{"url":"https://m.example/o.gif","size":"52311","width":"480"},
                "fixed_height":{"url":"https://m.example/200.gif"},
                "fixed_height_still":{"url":"https://m.example/200_s.gif"}
            }}],"pagination":{"offset":0}}"#,
        );

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.id().as_str(), "abc");
        assert_eq!(record.original().size_bytes(), Some(52311));
        assert_eq!(record.preview_animated().url(), "https://m.example/200.gif");
        assert_eq!(record.preview_static().url(), "https://m.example/200_s.gif");
    }

    #[test]
    fn missing_variant_is_rejected() {
        let records = parse(
            r#"{"data":[{"id":"abc","images":{
                "original":{"url":"https://m.example/o.gif"},
                "fixed_height":{"url":"https://m.example/200.gif"}
            }}]}"#,
        );

        assert_eq!(
            records[0],
            Err(ResourceError::Missing {
                variant: "fixed_height_still"
            })
        );
    }

    #[test]
    fn missing_id_is_rejected() {
        let records = parse(r#"{"data":[{"images":{}}]}"#);

        assert_eq!(records[0], Err(ResourceError::MissingId));
    }

    #[test]
    fn envelope_without_data_is_empty() {
        assert!(parse(r#"{"meta":{"status":200}}"#).is_empty());
    }
}
