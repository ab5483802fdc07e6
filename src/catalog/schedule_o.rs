//! Schedule O: Supplemental Information to Form 990 or 990-EZ.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![SupplementalInformationDetail::definition()]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedo_spplmntlinfrmtndtl",
    form = "ScheduleO",
    part = "Part I",
    description = "Supplemental information",
    group = "/IRS990ScheduleO/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleO/SupplementalInformationDetail/FormAndLineReferenceDesc",
        alias = "/IRS990ScheduleO/SupplementalInformationDetail/FormLineReference"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(
        xpath = "/IRS990ScheduleO/SupplementalInformationDetail/ExplanationTxt",
        long,
        alias = "/IRS990ScheduleO/SupplementalInformationDetail/Explanation"
    )]
    pub explanation_txt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormTable;

    #[test]
    fn test_schedule_o_columns() {
        let table = SupplementalInformationDetail::definition();
        let names: Vec<&str> = table.all_columns().map(|column| column.name.as_str()).collect();
        assert_eq!(names, ["object_id", "ein", "FrmAndLnRfrncDsc", "ExplntnTxt"]);
        assert!(table.parent().is_none());
    }
}
