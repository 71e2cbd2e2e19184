//! CFDI (Comprobante Fiscal Digital por Internet) XML parsing
//!
//! Extracts the three fields the audit needs from a CFDI document:
//! the issuer RFC (`cfdi:Emisor@Rfc`), the invoice total
//! (`cfdi:Comprobante@Total`) and the fiscal UUID
//! (`tfd:TimbreFiscalDigital@UUID`). Namespace prefixes vary between
//! stamping providers, so elements are matched by local name.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use rust_decimal::Decimal;
use thiserror::Error;

/// Issuer RFC used when the document carries none.
pub const DEFAULT_ISSUER_RFC: &str = "UNKNOWN";
/// Fiscal UUID used when the document is not stamped.
pub const DEFAULT_UUID: &str = "SIN UUID";

/// Parsed CFDI document, reduced to the fields the audit cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxDocument {
    /// Issuer RFC (tax id), `DEFAULT_ISSUER_RFC` if absent
    pub issuer_rfc: String,
    /// Invoice total, zero if absent or non-numeric
    pub total: Decimal,
    /// Fiscal UUID from the TimbreFiscalDigital, `DEFAULT_UUID` if absent
    pub uuid: String,
}

#[derive(Debug, Error)]
pub enum CfdiError {
    #[error("file is not valid UTF-8 text")]
    Encoding,
    #[error("missing Comprobante root element")]
    MissingRoot,
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Parse raw file bytes into a [`TaxDocument`].
///
/// A document without a `Comprobante` element anywhere in the tree is a
/// parse failure; missing attributes inside an otherwise valid document
/// fall back to the defaults above.
pub fn parse_cfdi(bytes: &[u8]) -> Result<TaxDocument, CfdiError> {
    let text = std::str::from_utf8(bytes).map_err(|_| CfdiError::Encoding)?;

    let mut reader = Reader::from_str(text);

    let mut saw_root = false;
    let mut issuer_rfc: Option<String> = None;
    let mut total: Option<Decimal> = None;
    let mut uuid: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                match e.local_name().as_ref() {
                    b"Comprobante" => {
                        saw_root = true;
                        // Non-numeric totals fall through to the zero default
                        total = attribute(e, "Total")?.and_then(|v| v.parse().ok());
                    }
                    b"Emisor" if saw_root => {
                        issuer_rfc = attribute(e, "Rfc")?;
                    }
                    b"TimbreFiscalDigital" if saw_root => {
                        uuid = attribute(e, "UUID")?;
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(CfdiError::Malformed(e.to_string())),
            _ => {}
        }
    }

    if !saw_root {
        return Err(CfdiError::MissingRoot);
    }

    Ok(TaxDocument {
        issuer_rfc: issuer_rfc.unwrap_or_else(|| DEFAULT_ISSUER_RFC.to_string()),
        total: total.unwrap_or(Decimal::ZERO),
        uuid: uuid.unwrap_or_else(|| DEFAULT_UUID.to_string()),
    })
}

/// Read a single attribute value, unescaped.
fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, CfdiError> {
    let attr = e
        .try_get_attribute(name)
        .map_err(|err| CfdiError::Malformed(err.to_string()))?;
    match attr {
        Some(a) => {
            let value = a
                .unescape_value()
                .map_err(|err| CfdiError::Malformed(err.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}
