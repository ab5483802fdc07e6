//! Schedule I: Grants and Other Assistance to Organizations, Governments and
//! Individuals in the United States.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        RecipientTable::definition(),
        GrantsOtherAsstToIndivInUS::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedi_part_i",
    form = "ScheduleI",
    part = "Part I",
    description = "General information on grants and assistance"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Grant records maintained
    #[field(xpath = "/IRS990ScheduleI/GrantRecordsMaintainedInd", line = "Part I Line 1", max_length = 5)]
    pub grant_records_maintained_ind: Option<String>,

    /// Procedures for monitoring use of grant funds
    #[field(xpath = "/IRS990ScheduleI/MonitoringProceduresTxt", line = "Part I Line 2", long)]
    pub monitoring_procedures_txt: Option<String>,

    /// Number of 501(c)(3) and government organizations listed
    #[field(xpath = "/IRS990ScheduleI/Total501c3OrgCnt", line = "Part II Line 2")]
    pub total_501c3_org_cnt: Option<i32>,

    /// Number of other organizations listed
    #[field(xpath = "/IRS990ScheduleI/TotalOtherOrgCnt", line = "Part II Line 3")]
    pub total_other_org_cnt: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedi_rcpnttbl",
    form = "ScheduleI",
    part = "Part II",
    description = "Grants to domestic organizations and governments",
    group = "/IRS990ScheduleI/RecipientTable",
    parent = "return_skedi_part_i"
)]
pub struct RecipientTable {
    pub object_id: String,
    pub ein: String,

    /// Recipient name
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/RecipientBusinessName/BusinessNameLine1Txt", line = "Part II Line 1 Column a")]
    pub recipient_business_name_txt: Option<String>,

    /// Recipient city
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/USAddress/CityNm", line = "Part II Line 1 Column a", max_length = 22)]
    pub city_nm: Option<String>,

    /// Recipient state
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/USAddress/StateAbbreviationCd", line = "Part II Line 1 Column a", max_length = 2)]
    pub state_abbreviation_cd: Option<String>,

    /// Recipient EIN
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/RecipientEIN", line = "Part II Line 1 Column b", max_length = 9)]
    pub recipient_ein: Option<String>,

    /// IRC section
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/IRCSectionDesc", line = "Part II Line 1 Column c")]
    pub irc_section_desc: Option<String>,

    /// Amount of cash grant
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/CashGrantAmt", line = "Part II Line 1 Column d")]
    pub cash_grant_amt: Option<i64>,

    /// Amount of noncash assistance
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/NonCashAssistanceAmt", line = "Part II Line 1 Column e")]
    pub non_cash_assistance_amt: Option<i64>,

    /// Purpose of grant or assistance
    #[field(xpath = "/IRS990ScheduleI/RecipientTable/PurposeOfGrantTxt", line = "Part II Line 1 Column h", long)]
    pub purpose_of_grant_txt: Option<String>,

    /// Recipient name, continued
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/RecipientBusinessName/BusinessNameLine2Txt",
        line = "Part II Line 1 Column a"
    )]
    pub business_name_line_2_txt: Option<String>,

    /// Recipient street address
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/USAddress/AddressLine1Txt",
        line = "Part II Line 1 Column a"
    )]
    pub address_line_1_txt: Option<String>,

    /// Recipient ZIP code
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/USAddress/ZIPCd",
        line = "Part II Line 1 Column a",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Recipient foreign street address
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/ForeignAddress/AddressLine1Txt",
        line = "Part II Line 1 Column a"
    )]
    pub foreign_address_address_line_1_txt: Option<String>,

    /// Recipient foreign city
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/ForeignAddress/CityNm",
        line = "Part II Line 1 Column a",
        max_length = 22
    )]
    pub foreign_address_city_nm: Option<String>,

    /// Recipient country
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/ForeignAddress/CountryCd",
        line = "Part II Line 1 Column a",
        max_length = 2
    )]
    pub country_cd: Option<String>,

    /// Method of valuation
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/ValuationMethodUsedDesc",
        line = "Part II Line 1 Column f",
        long
    )]
    pub valuation_method_used_desc: Option<String>,

    /// Description of noncash assistance
    #[field(
        xpath = "/IRS990ScheduleI/RecipientTable/NonCashAssistanceDesc",
        line = "Part II Line 1 Column g",
        long
    )]
    pub non_cash_assistance_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedi_grntsothrassttindvinus",
    form = "ScheduleI",
    part = "Part III",
    description = "Grants to domestic individuals",
    group = "/IRS990ScheduleI/GrantsOtherAsstToIndivInUSGrp",
    parent = "return_skedi_part_i"
)]
pub struct GrantsOtherAsstToIndivInUS {
    pub object_id: String,
    pub ein: String,

    /// Type of grant or assistance
    #[field(xpath = "/IRS990ScheduleI/GrantsOtherAsstToIndivInUSGrp/GrantTypeTxt", line = "Part III Column a")]
    pub grant_type_txt: Option<String>,

    /// Number of recipients
    #[field(xpath = "/IRS990ScheduleI/GrantsOtherAsstToIndivInUSGrp/RecipientCnt", line = "Part III Column b")]
    pub recipient_cnt: Option<i32>,

    /// Amount of cash grant
    #[field(xpath = "/IRS990ScheduleI/GrantsOtherAsstToIndivInUSGrp/CashGrantAmt", line = "Part III Column c")]
    pub cash_grant_amt: Option<i64>,

    /// Amount of noncash assistance
    #[field(xpath = "/IRS990ScheduleI/GrantsOtherAsstToIndivInUSGrp/NonCashAssistanceAmt", line = "Part III Column d")]
    pub non_cash_assistance_amt: Option<i64>,

    /// Method of valuation
    #[field(xpath = "/IRS990ScheduleI/GrantsOtherAsstToIndivInUSGrp/ValuationMethodUsedDesc", line = "Part III Column e")]
    pub valuation_method_used_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedi_spplmntlinfrmtndtl",
    form = "ScheduleI",
    part = "Part IV",
    description = "Supplemental information",
    group = "/IRS990ScheduleI/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleI/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part IV"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleI/SupplementalInformationDetail/ExplanationTxt", line = "Part IV", long)]
    pub explanation_txt: Option<String>,
}
