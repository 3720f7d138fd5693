//! Document kinds and image formats accepted for verification uploads.

/// Verification document accepted from couriers.
///
/// `wire_name` values are the object-name prefixes used in storage paths and
/// must stay stable; the backend's review tooling keys on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    DriverLicense,
    VehicleRegistration,
    Selfie,
    VehiclePhoto,
}

impl DocumentKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::DriverLicense => "cnh",
            Self::VehicleRegistration => "crlv",
            Self::Selfie => "selfie",
            Self::VehiclePhoto => "vehicle_photo",
        }
    }

    /// Human-readable label for notifications and upload screens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DriverLicense => "Driver's license",
            Self::VehicleRegistration => "Vehicle registration",
            Self::Selfie => "Selfie with document",
            Self::VehiclePhoto => "Vehicle photo",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::DriverLicense | Self::VehicleRegistration => "📄",
            Self::Selfie | Self::VehiclePhoto => "📷",
        }
    }
}

/// Image formats accepted for document uploads.
///
/// The extension doubles as the media-type suffix on the storage request
/// (`image/{ext}`), matching what the backend's storage rules expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    pub fn media_type(&self) -> String {
        format!("image/{}", self.extension())
    }

    /// Checks the decoded bytes against the format's file signature.
    pub fn matches_signature(&self, bytes: &[u8]) -> bool {
        match self {
            Self::Jpg | Self::Jpeg => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
            Self::Png => bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests extension parsing for the supported formats.
    ///
    /// Expected: jpg/jpeg/png parse case-insensitively, others do not
    #[test]
    fn parses_supported_extensions() {
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpg));
        assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("webp"), None);
        assert_eq!(ImageFormat::from_extension("pdf"), None);
    }

    /// Tests file-signature sniffing for both image families.
    ///
    /// Expected: matching signatures accepted, mismatches rejected
    #[test]
    fn sniffs_image_signatures() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00];

        assert!(ImageFormat::Png.matches_signature(&png));
        assert!(ImageFormat::Jpeg.matches_signature(&jpeg));
        assert!(ImageFormat::Jpg.matches_signature(&jpeg));
        assert!(!ImageFormat::Png.matches_signature(&jpeg));
        assert!(!ImageFormat::Jpg.matches_signature(&png));
        assert!(!ImageFormat::Png.matches_signature(&[]));
    }
}
