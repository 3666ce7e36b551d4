use strum::{EnumIter, EnumString};

/// Content types served for a filename extension. Lookup ignores ASCII case;
/// an extension outside this table has no content type at all.
#[derive(EnumString, EnumIter, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[strum(ascii_case_insensitive)]
pub enum ContentType {
    #[strum(serialize = "html")]
    Html,
    #[strum(serialize = "css")]
    Css,
    #[strum(serialize = "js")]
    Js,
    #[strum(serialize = "jpg")]
    Jpg,
    #[strum(serialize = "gif")]
    Gif,
    #[strum(serialize = "ico")]
    Ico,
    #[strum(serialize = "png")]
    Png,
    #[strum(serialize = "pdf")]
    Pdf,
    #[strum(serialize = "docx")]
    Docx,
    #[strum(serialize = "xlsx")]
    Xlsx,
    #[strum(serialize = "pptx")]
    Pptx,
    #[strum(serialize = "xml")]
    Xml,
    #[strum(serialize = "zip")]
    Zip,
}

impl ContentType {
    /// Classifies a request target by the text after its last `.`.
    pub fn from_uri(uri: &str) -> Option<ContentType> {
        let (_, ext) = uri.rsplit_once('.')?;
        ext.parse().ok()
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Css => "text/css",
            ContentType::Js => "application/javascript",
            ContentType::Jpg => "image/jpeg",
            ContentType::Gif => "image/gif",
            ContentType::Ico => "image/x-icon",
            ContentType::Png => "image/png",
            ContentType::Pdf => "application/pdf",
            ContentType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ContentType::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ContentType::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            ContentType::Xml => "application/xml",
            ContentType::Zip => "application/zip",
        }
    }
}
