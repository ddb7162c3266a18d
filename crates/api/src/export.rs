//! CSV serialization for report downloads.
//!
//! Output is UTF-8 with a header row whose column names match the Asset
//! attribute names. An empty corpus still produces the header row.

use stockroom_db::models::asset::Asset;

/// Column order of the exported CSV, matching [`Asset`]'s attributes.
const HEADER: [&str; 8] = [
    "id",
    "name",
    "serial",
    "category",
    "location",
    "purchase_date",
    "quantity",
    "status",
];

/// Serialize assets to CSV bytes.
pub fn assets_to_csv(assets: &[Asset]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for asset in assets {
        writer.write_record(&[
            asset.id.to_string(),
            asset.name.clone(),
            asset.serial.clone(),
            asset.category.clone(),
            asset.location.clone(),
            asset
                .purchase_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            asset.quantity.to_string(),
            asset.status.clone(),
        ])?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error().into())
}
