use crate::coded::coded_enum;

coded_enum! {
    /// Media types the client sends and understands.
    pub enum ContentType {
        /// URL-encoded form body
        Form => "application/x-www-form-urlencoded",
        /// JSON body
        Json => "application/json",
    }
}

impl ContentType {
    /// Resolve a `Content-Type` header value, ignoring parameters.
    ///
    /// `application/json; charset=utf-8` resolves to [`ContentType::Json`].
    /// The media type itself is still matched exactly.
    pub fn from_header(value: &str) -> Option<Self> {
        use crate::coded::CodedEnum;

        let media_type = value.split(';').next().unwrap_or(value).trim();
        Self::resolve(media_type)
    }
}
