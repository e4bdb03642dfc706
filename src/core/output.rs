use crate::domain::model::PricebookDocument;
use crate::utils::error::Result;

/// Encodes the document as JSON, two-space indented when `pretty`.
pub fn serialize(document: &PricebookDocument, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(document)?
    } else {
        serde_json::to_vec(document)?
    };
    Ok(bytes)
}

pub fn deserialize(bytes: &[u8]) -> Result<PricebookDocument> {
    Ok(serde_json::from_slice(bytes)?)
}
