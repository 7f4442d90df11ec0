use serde::{Deserialize, Serialize};

use crate::bigram::{Bigrams, KameaLocator};
use crate::ditrune::Ditrune;
use crate::family::{self, Classification};

/// Decimal and digit views of one transform image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformImage {
    pub decimal: u16,
    pub ditrune: Ditrune,
}

impl TransformImage {
    fn of(ditrune: Ditrune) -> Self {
        Self {
            decimal: ditrune.decimal(),
            ditrune,
        }
    }
}

/// Everything the engine can say about one Ditrune, shaped for JSON
/// export: both numeral forms, the positional bigrams and locator, all
/// three transform images, the conrune differential, and the family
/// classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DitruneProfile {
    pub decimal: u16,
    pub ditrune: Ditrune,
    pub locator: KameaLocator,
    pub bigrams: Bigrams,
    pub conrune: TransformImage,
    pub reversal: TransformImage,
    pub conrune_reversal: TransformImage,
    pub signed_differential: i64,
    pub abs_differential: u64,
    pub classification: Classification,
}

impl DitruneProfile {
    pub fn of(ditrune: Ditrune) -> Self {
        let conrune = ditrune.conrune();
        let signed_differential =
            i64::from(ditrune.decimal()) - i64::from(conrune.decimal());
        Self {
            decimal: ditrune.decimal(),
            ditrune,
            locator: KameaLocator::of(ditrune),
            bigrams: Bigrams::of(ditrune),
            conrune: TransformImage::of(conrune),
            reversal: TransformImage::of(ditrune.reversal()),
            conrune_reversal: TransformImage::of(ditrune.conrune_reversal()),
            signed_differential,
            abs_differential: signed_differential.unsigned_abs(),
            classification: family::classify(ditrune),
        }
    }
}

/// One profile as pretty-printed JSON.
pub fn export_json(ditrune: Ditrune) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DitruneProfile::of(ditrune))
}

/// Parse a profile back from its JSON form.
pub fn import_json(json: &str) -> serde_json::Result<DitruneProfile> {
    serde_json::from_str(json)
}
