use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode snapshot with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode a snapshot's raw bytes into UTF-8 using: BOM -> caller charset
/// hint -> chardetng fallback.
pub fn decode_page(bytes: &[u8], charset_hint: Option<&str>) -> Result<DecodedPage, DecodeError> {
    // 1) BOM aware decode using encoding_rs helper
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    // 2) caller-supplied charset label (e.g. from how the snapshot was saved)
    if let Some(label) = charset_hint {
        if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
            return decode_with(bytes, encoding);
        }
    }

    // 3) chardetng detection over the full snapshot
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    decode_with(bytes, encoding)
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedPage, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(DecodedPage {
        html: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}
