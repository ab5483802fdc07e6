//! A parsed e-file return with a path index over its elements.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::xml::XmlDocument;
use crate::error::{Irs990Error, Result};
use crate::schema::{EIN_MAX_LENGTH, FilingKey, FormKind, OBJECT_ID_MAX_LENGTH};

const EIN_XPATH: &str = "/ReturnHeader/Filer/EIN";
const RETURN_TYPE_XPATHS: [&str; 2] = ["/ReturnHeader/ReturnTypeCd", "/ReturnHeader/ReturnType"];
const TAX_PERIOD_END_XPATHS: [&str; 2] =
    ["/ReturnHeader/TaxPeriodEndDt", "/ReturnHeader/TaxPeriodEndDate"];
const TAX_YEAR_XPATHS: [&str; 2] = ["/ReturnHeader/TaxYr", "/ReturnHeader/TaxYear"];

/// Header facts about a return
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingSummary {
    pub object_id: String,
    pub ein: String,
    pub return_type: Option<String>,
    pub tax_period_end: Option<String>,
    pub tax_year: Option<String>,
    pub version: Option<String>,
    pub forms: Vec<FormKind>,
}

/// One IRS e-file return
///
/// Element paths are indexed from the children of `Return` and of
/// `ReturnData`, so `/ReturnHeader/Filer/EIN` and `/IRS990/TotalEmployeeCnt`
/// resolve directly.
#[derive(Debug)]
pub struct Filing {
    key: FilingKey,
    source: Option<PathBuf>,
    document: XmlDocument,
    paths: FxHashMap<String, Vec<usize>>,
    forms: Vec<FormKind>,
    version: Option<String>,
}

impl Filing {
    /// Parse a return held in memory
    ///
    /// # Errors
    /// `InvalidFiling` for a bad `object_id`, a document that is not a
    /// `Return` or an over-long EIN; `MissingKey` when the header has no EIN;
    /// `Xml` for malformed input
    pub fn from_xml(object_id: &str, xml: &str) -> Result<Self> {
        Self::build(object_id, xml, None)
    }

    /// Read and parse a return file
    ///
    /// The `object_id` is the file stem with any `_public` suffix removed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let object_id = object_id_for_path(path)
            .ok_or_else(|| Irs990Error::invalid_filing(path, "file name has no stem"))?;
        let xml = fs::read_to_string(path)?;
        Self::build(&object_id, &xml, Some(path.to_path_buf()))
    }

    fn build(object_id: &str, xml: &str, source: Option<PathBuf>) -> Result<Self> {
        let origin = source
            .clone()
            .unwrap_or_else(|| PathBuf::from(object_id));

        if object_id.is_empty() || object_id.chars().count() > OBJECT_ID_MAX_LENGTH {
            return Err(Irs990Error::invalid_filing(
                &origin,
                format!("object_id must be 1 to {OBJECT_ID_MAX_LENGTH} characters"),
            ));
        }

        let document = XmlDocument::parse(xml)?;
        let Some(root) = document.root() else {
            return Err(Irs990Error::invalid_filing(&origin, "empty document"));
        };
        if root.name != "Return" {
            return Err(Irs990Error::invalid_filing(
                &origin,
                format!("root element is {}, expected Return", root.name),
            ));
        }
        let version = root.attribute("returnVersion").map(str::to_string);

        let mut paths: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut forms = Vec::new();
        for &child in &root.children {
            let element = document.element(child);
            if element.name == "ReturnData" {
                for &form_idx in &element.children {
                    let form_name = &document.element(form_idx).name;
                    if let Some(form) = FormKind::from_root_element(form_name) {
                        if !forms.contains(&form) {
                            forms.push(form);
                        }
                    }
                    index_subtree(&document, form_idx, format!("/{form_name}"), &mut paths);
                }
            } else {
                if let Some(form) = FormKind::from_root_element(&element.name) {
                    if !forms.contains(&form) {
                        forms.push(form);
                    }
                }
                index_subtree(&document, child, format!("/{}", element.name), &mut paths);
            }
        }
        forms.sort();

        let ein = paths
            .get(EIN_XPATH)
            .into_iter()
            .flatten()
            .find_map(|&idx| document.element(idx).value())
            .map(str::to_string)
            .ok_or_else(|| Irs990Error::MissingKey {
                object_id: object_id.to_string(),
                field: "ein",
            })?;
        if ein.chars().count() > EIN_MAX_LENGTH {
            return Err(Irs990Error::invalid_filing(
                &origin,
                format!("EIN {ein} is longer than {EIN_MAX_LENGTH} characters"),
            ));
        }

        log::trace!(
            "Indexed {} paths for filing {object_id} ({} forms)",
            paths.len(),
            forms.len()
        );

        Ok(Self {
            key: FilingKey::new(object_id, ein),
            source,
            document,
            paths,
            forms,
            version,
        })
    }

    /// The `(object_id, ein)` key every row of this filing carries
    #[must_use]
    pub fn key(&self) -> &FilingKey {
        &self.key
    }

    /// Identifier of this filing
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.key.object_id
    }

    /// Filer EIN
    #[must_use]
    pub fn ein(&self) -> &str {
        &self.key.ein
    }

    /// File the filing was read from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The parsed document
    #[must_use]
    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    /// Schema version from the `returnVersion` attribute
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Forms and schedules present, in catalog order
    #[must_use]
    pub fn forms(&self) -> &[FormKind] {
        &self.forms
    }

    /// Whether the return contains the given form or schedule
    #[must_use]
    pub fn has_form(&self, form: FormKind) -> bool {
        self.forms.contains(&form)
    }

    /// Element indexes at an absolute path, in document order
    #[must_use]
    pub fn occurrences(&self, xpath: &str) -> &[usize] {
        self.paths.get(xpath).map(Vec::as_slice).unwrap_or_default()
    }

    /// First non-empty text at an absolute path
    #[must_use]
    pub fn value(&self, xpath: &str) -> Option<&str> {
        self.occurrences(xpath)
            .iter()
            .find_map(|&idx| self.document.element(idx).value())
    }

    /// All non-empty texts at an absolute path
    #[must_use]
    pub fn values(&self, xpath: &str) -> Vec<&str> {
        self.occurrences(xpath)
            .iter()
            .filter_map(|&idx| self.document.element(idx).value())
            .collect()
    }

    /// Return type code, e.g. `990EZ`
    #[must_use]
    pub fn return_type(&self) -> Option<&str> {
        self.first_of(&RETURN_TYPE_XPATHS)
    }

    /// Tax period end date as written in the header
    #[must_use]
    pub fn tax_period_end(&self) -> Option<&str> {
        self.first_of(&TAX_PERIOD_END_XPATHS)
    }

    /// Tax year as written in the header
    #[must_use]
    pub fn tax_year(&self) -> Option<&str> {
        self.first_of(&TAX_YEAR_XPATHS)
    }

    fn first_of(&self, xpaths: &[&str]) -> Option<&str> {
        xpaths.iter().find_map(|xpath| self.value(xpath))
    }

    /// Header facts for display
    #[must_use]
    pub fn summary(&self) -> FilingSummary {
        FilingSummary {
            object_id: self.key.object_id.clone(),
            ein: self.key.ein.clone(),
            return_type: self.return_type().map(str::to_string),
            tax_period_end: self.tax_period_end().map(str::to_string),
            tax_year: self.tax_year().map(str::to_string),
            version: self.version.clone(),
            forms: self.forms.clone(),
        }
    }
}

fn index_subtree(
    document: &XmlDocument,
    idx: usize,
    path: String,
    paths: &mut FxHashMap<String, Vec<usize>>,
) {
    paths.entry(path.clone()).or_default().push(idx);
    for &child in &document.element(idx).children {
        let child_path = format!("{path}/{}", document.element(child).name);
        index_subtree(document, child, child_path, paths);
    }
}

/// `object_id` for a return file: the stem without a `_public` suffix
#[must_use]
pub fn object_id_for_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let object_id = stem.strip_suffix("_public").unwrap_or(&stem);
    (!object_id.is_empty()).then(|| object_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETURN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile" returnVersion="2018v3.1">
  <ReturnHeader>
    <ReturnTypeCd>990</ReturnTypeCd>
    <TaxPeriodEndDt>2018-12-31</TaxPeriodEndDt>
    <TaxYr>2018</TaxYr>
    <Filer><EIN>010203040</EIN></Filer>
  </ReturnHeader>
  <ReturnData documentCnt="2">
    <IRS990>
      <ProgramServiceRevenueGrp><Desc>Tuition</Desc></ProgramServiceRevenueGrp>
      <ProgramServiceRevenueGrp><Desc>Fees</Desc></ProgramServiceRevenueGrp>
    </IRS990>
    <IRS990ScheduleO>
      <SupplementalInformationDetail><ExplanationTxt>None</ExplanationTxt></SupplementalInformationDetail>
    </IRS990ScheduleO>
  </ReturnData>
</Return>"#;

    #[test]
    fn test_header_and_forms() {
        let filing = Filing::from_xml("201901", RETURN).expect("filing");
        assert_eq!(filing.ein(), "010203040");
        assert_eq!(filing.return_type(), Some("990"));
        assert_eq!(filing.tax_year(), Some("2018"));
        assert_eq!(filing.version(), Some("2018v3.1"));
        assert_eq!(
            filing.forms(),
            &[FormKind::ReturnHeader, FormKind::Form990, FormKind::ScheduleO]
        );
        assert!(!filing.has_form(FormKind::Form990EZ));
    }

    #[test]
    fn test_path_index_keeps_document_order() {
        let filing = Filing::from_xml("201901", RETURN).expect("filing");
        assert_eq!(
            filing.values("/IRS990/ProgramServiceRevenueGrp/Desc"),
            vec!["Tuition", "Fees"]
        );
        assert_eq!(filing.occurrences("/IRS990/ProgramServiceRevenueGrp").len(), 2);
        assert!(filing.occurrences("/ReturnData/IRS990").is_empty());
    }

    #[test]
    fn test_missing_ein_is_rejected() {
        let xml = "<Return><ReturnHeader><Filer/></ReturnHeader><ReturnData/></Return>";
        let err = Filing::from_xml("201901", xml).expect_err("no ein");
        assert!(matches!(err, Irs990Error::MissingKey { field: "ein", .. }));
    }

    #[test]
    fn test_bad_object_id_and_root() {
        assert!(Filing::from_xml("", RETURN).is_err());
        assert!(Filing::from_xml(&"9".repeat(32), RETURN).is_err());
        assert!(matches!(
            Filing::from_xml("201901", "<Other/>"),
            Err(Irs990Error::InvalidFiling { .. })
        ));
    }

    #[test]
    fn test_object_id_for_path() {
        assert_eq!(
            object_id_for_path(Path::new("/data/201913199349310386_public.xml")),
            Some("201913199349310386".to_string())
        );
        assert_eq!(
            object_id_for_path(Path::new("202001.xml")),
            Some("202001".to_string())
        );
    }
}
