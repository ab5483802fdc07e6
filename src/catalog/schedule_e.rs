//! Schedule E: Schools.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![PartI::definition(), SupplementalInformationDetail::definition()]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_skede_part_i", form = "ScheduleE", part = "Part I", description = "Schools")]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Racially nondiscriminatory policy stated in governing instruments
    #[field(xpath = "/IRS990ScheduleE/NondiscriminatoryPolicyStmtInd", line = "Part I Line 1", max_length = 5)]
    pub nondiscriminatory_policy_stmt_ind: Option<String>,

    /// Policy included in brochures, catalogues and other written communications
    #[field(xpath = "/IRS990ScheduleE/PolicyStmtInBrochuresInd", line = "Part I Line 2", max_length = 5)]
    pub policy_stmt_in_brochures_ind: Option<String>,

    /// Policy publicized through the media
    #[field(xpath = "/IRS990ScheduleE/PolicyPublicizedViaMediaInd", line = "Part I Line 3", max_length = 5)]
    pub policy_publicized_via_media_ind: Option<String>,

    /// Records of racial composition maintained
    #[field(xpath = "/IRS990ScheduleE/MaintainRacialStatisticsInd", line = "Part I Line 4a", max_length = 5)]
    pub maintain_racial_statistics_ind: Option<String>,

    /// Discriminates by race in any way
    #[field(xpath = "/IRS990ScheduleE/DiscriminateRaceInd", line = "Part I Line 5", max_length = 5)]
    pub discriminate_race_ind: Option<String>,

    /// Receives financial aid from a government agency
    #[field(xpath = "/IRS990ScheduleE/GovernmentFinancialAidInd", line = "Part I Line 6", max_length = 5)]
    pub government_financial_aid_ind: Option<String>,

    /// Certifies compliance with Rev. Proc. 75-50
    #[field(xpath = "/IRS990ScheduleE/CertifyComplianceInd", line = "Part I Line 8", max_length = 5)]
    pub certify_compliance_ind: Option<String>,

    /// Records of scholarships and other financial assistance maintained
    #[field(
        xpath = "/IRS990ScheduleE/MaintainScholarshipRecordsInd",
        line = "Part I Line 4b",
        max_length = 5
    )]
    pub maintain_scholarship_records_ind: Option<String>,

    /// Copies of brochures, catalogs and advertising maintained
    #[field(xpath = "/IRS990ScheduleE/MaintainCopiesBrochuresInd", line = "Part I Line 4c", max_length = 5)]
    pub maintain_copies_brochures_ind: Option<String>,

    /// Copies of solicitations for contributions maintained
    #[field(
        xpath = "/IRS990ScheduleE/MaintainCopiesSolicitationsInd",
        line = "Part I Line 4d",
        max_length = 5
    )]
    pub maintain_copies_solicitations_ind: Option<String>,

    /// Discriminates by race in students' rights or privileges
    #[field(
        xpath = "/IRS990ScheduleE/DiscriminateRaceStdntRightsInd",
        line = "Part I Line 5a",
        max_length = 5
    )]
    pub discriminate_race_stdnt_rights_ind: Option<String>,

    /// Discriminates by race in admissions policies
    #[field(xpath = "/IRS990ScheduleE/DiscriminateRaceAdmissionInd", line = "Part I Line 5b", max_length = 5)]
    pub discriminate_race_admission_ind: Option<String>,

    /// Discriminates by race in employment of faculty or administrators
    #[field(xpath = "/IRS990ScheduleE/DiscriminateRaceEmployFacInd", line = "Part I Line 5c", max_length = 5)]
    pub discriminate_race_employ_fac_ind: Option<String>,

    /// Discriminates by race in scholarships or other financial assistance
    #[field(
        xpath = "/IRS990ScheduleE/DiscriminateRaceScholarshipInd",
        line = "Part I Line 5d",
        max_length = 5
    )]
    pub discriminate_race_scholarship_ind: Option<String>,

    /// Discriminates by race in educational policies
    #[field(xpath = "/IRS990ScheduleE/DiscriminateRaceEducPlcyInd", line = "Part I Line 5e", max_length = 5)]
    pub discriminate_race_educ_plcy_ind: Option<String>,

    /// Discriminates by race in use of facilities
    #[field(xpath = "/IRS990ScheduleE/DiscriminateRaceUseFcltsInd", line = "Part I Line 5f", max_length = 5)]
    pub discriminate_race_use_fclts_ind: Option<String>,

    /// Discriminates by race in athletic programs
    #[field(
        xpath = "/IRS990ScheduleE/DiscriminateRaceAthleticPrgmInd",
        line = "Part I Line 5g",
        max_length = 5
    )]
    pub discriminate_race_athletic_prgm_ind: Option<String>,

    /// Discriminates by race in other extracurricular activities
    #[field(xpath = "/IRS990ScheduleE/DiscriminateRaceOtherActyInd", line = "Part I Line 5h", max_length = 5)]
    pub discriminate_race_other_acty_ind: Option<String>,

    /// Government financial aid revoked or suspended
    #[field(xpath = "/IRS990ScheduleE/GovernmentFinancialAidRvkInd", line = "Part I Line 6b", max_length = 5)]
    pub government_financial_aid_rvk_ind: Option<String>,

    /// Complies with the applicable requirements of Rev. Proc. 75-50
    #[field(xpath = "/IRS990ScheduleE/CompliesWithRevProc7550Ind", line = "Part I Line 7", max_length = 5)]
    pub complies_with_rev_proc_7550_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skede_spplmntlinfrmtndtl",
    form = "ScheduleE",
    part = "Part II",
    description = "Supplemental information",
    group = "/IRS990ScheduleE/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleE/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part II"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleE/SupplementalInformationDetail/ExplanationTxt", line = "Part II", long)]
    pub explanation_txt: Option<String>,
}
