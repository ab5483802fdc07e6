//! Schedule F: Statement of Activities Outside the United States.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        AccountActivitiesOutsideUS::definition(),
        PartII::definition(),
        GrantsToOrgOutsideUS::definition(),
        ForeignIndividualsGrants::definition(),
        PartIV::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedf_part_i",
    form = "ScheduleF",
    part = "Part I",
    description = "General information on activities outside the United States"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Grant records maintained
    #[field(xpath = "/IRS990ScheduleF/GrantRecordsMaintainedInd", line = "Part I Line 1", max_length = 5)]
    pub grant_records_maintained_ind: Option<String>,

    /// Total number of offices in all regions
    #[field(xpath = "/IRS990ScheduleF/TotalOfficeCnt", line = "Part I Line 3a Column b")]
    pub total_office_cnt: Option<i32>,

    /// Total number of employees and agents in all regions
    #[field(xpath = "/IRS990ScheduleF/TotalEmployeeCnt", line = "Part I Line 3a Column c")]
    pub total_employee_cnt: Option<i32>,

    /// Total expenditures in all regions
    #[field(xpath = "/IRS990ScheduleF/TotalSpentAmt", line = "Part I Line 3b Column f")]
    pub total_spent_amt: Option<i64>,

    /// Grantee interest in a foreign corporation
    #[field(xpath = "/IRS990ScheduleF/ForeignCorporationInterestInd", line = "Part V Line 1", max_length = 5)]
    pub foreign_corporation_interest_ind: Option<String>,

    /// Procedures for monitoring use of grant funds outside the United States
    #[field(xpath = "/IRS990ScheduleF/MonitoringProceduresTxt", line = "Part I Line 2", long)]
    pub monitoring_procedures_txt: Option<String>,

    /// Subtotal of offices
    #[field(xpath = "/IRS990ScheduleF/SubtotalOfficeCnt", line = "Part I Line 3a Column b")]
    pub subtotal_office_cnt: Option<i32>,

    /// Subtotal of employees
    #[field(xpath = "/IRS990ScheduleF/SubtotalEmployeeCnt", line = "Part I Line 3a Column c")]
    pub subtotal_employee_cnt: Option<i32>,

    /// Subtotal of expenditures
    #[field(xpath = "/IRS990ScheduleF/SubtotalSpentAmt", line = "Part I Line 3a Column f")]
    pub subtotal_spent_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedf_accntactvtsotsdus",
    form = "ScheduleF",
    part = "Part I",
    description = "Activities per region",
    group = "/IRS990ScheduleF/AccountActivitiesOutsideUSGrp",
    parent = "return_skedf_part_i"
)]
pub struct AccountActivitiesOutsideUS {
    pub object_id: String,
    pub ein: String,

    /// Region
    #[field(xpath = "/IRS990ScheduleF/AccountActivitiesOutsideUSGrp/RegionTxt", line = "Part I Line 3 Column a")]
    pub region_txt: Option<String>,

    /// Number of offices in the region
    #[field(xpath = "/IRS990ScheduleF/AccountActivitiesOutsideUSGrp/OfficesCnt", line = "Part I Line 3 Column b")]
    pub offices_cnt: Option<i32>,

    /// Number of employees and agents in the region
    #[field(xpath = "/IRS990ScheduleF/AccountActivitiesOutsideUSGrp/EmployeeCnt", line = "Part I Line 3 Column c")]
    pub employee_cnt: Option<i32>,

    /// Activities conducted in the region
    #[field(xpath = "/IRS990ScheduleF/AccountActivitiesOutsideUSGrp/TypeOfActivitiesConductedTxt", line = "Part I Line 3 Column d")]
    pub type_of_activities_conducted_txt: Option<String>,

    /// Specific services provided in the region
    #[field(xpath = "/IRS990ScheduleF/AccountActivitiesOutsideUSGrp/SpecificServicesProvidedTxt", line = "Part I Line 3 Column e", long)]
    pub specific_services_provided_txt: Option<String>,

    /// Expenditures for and investments in the region
    #[field(xpath = "/IRS990ScheduleF/AccountActivitiesOutsideUSGrp/RegionTotalExpendituresAmt", line = "Part I Line 3 Column f")]
    pub region_total_expenditures_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedf_part_ii",
    form = "ScheduleF",
    part = "Part II",
    description = "Grants and other assistance to organizations or entities outside the United States"
)]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Number of recipient organizations recognized as charities
    #[field(xpath = "/IRS990ScheduleF/Total501c3OrgCnt", line = "Part II Line 2")]
    pub total_501c3_org_cnt: Option<i32>,

    /// Number of other recipient organizations or entities
    #[field(xpath = "/IRS990ScheduleF/TotalOtherOrgCnt", line = "Part II Line 3")]
    pub total_other_org_cnt: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedf_grntstorgotsdus",
    form = "ScheduleF",
    part = "Part II",
    description = "Grants and other assistance to organizations outside the United States",
    group = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp",
    parent = "return_skedf_part_ii"
)]
pub struct GrantsToOrgOutsideUS {
    pub object_id: String,
    pub ein: String,

    /// Region
    #[field(xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/RegionTxt", line = "Part II Line 1 Column b")]
    pub region_txt: Option<String>,

    /// Purpose of grant
    #[field(xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/PurposeOfGrantTxt", line = "Part II Line 1 Column c", long)]
    pub purpose_of_grant_txt: Option<String>,

    /// Amount of cash grant
    #[field(xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/CashGrantAmt", line = "Part II Line 1 Column d")]
    pub cash_grant_amt: Option<i64>,

    /// Manner of cash disbursement
    #[field(xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/MannerOfCashDisbursementTxt", line = "Part II Line 1 Column e")]
    pub manner_of_cash_disbursement_txt: Option<String>,

    /// Amount of noncash assistance
    #[field(xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/NonCashAssistanceAmt", line = "Part II Line 1 Column f")]
    pub non_cash_assistance_amt: Option<i64>,

    /// Description of noncash assistance
    #[field(xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/DescriptionOfNonCashAssistTxt", line = "Part II Line 1 Column g", long)]
    pub description_of_non_cash_assist_txt: Option<String>,

    /// Name of organization
    #[field(
        xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/RecipientName/BusinessNameLine1Txt",
        line = "Part II Line 1 Column a"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// IRC section and EIN, if applicable
    #[field(
        xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/IRCSectionDesc",
        line = "Part II Line 1 Column a",
        long
    )]
    pub irc_section_desc: Option<String>,

    /// Method of valuation
    #[field(
        xpath = "/IRS990ScheduleF/GrantsToOrgOutsideUSGrp/ValuationMethodUsedDesc",
        line = "Part II Line 1 Column h",
        long
    )]
    pub valuation_method_used_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedf_frgnindvdlsgrnts",
    form = "ScheduleF",
    part = "Part III",
    description = "Grants and other assistance to individuals outside the United States",
    group = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp"
)]
pub struct ForeignIndividualsGrants {
    pub object_id: String,
    pub ein: String,

    /// Type of grant or assistance
    #[field(
        xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/TypeOfGrantOrAssistanceTxt",
        line = "Part III Column a"
    )]
    pub type_of_grant_or_assistance_txt: Option<String>,

    /// Region
    #[field(xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/RegionTxt", line = "Part III Column b")]
    pub region_txt: Option<String>,

    /// Number of recipients
    #[field(xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/RecipientCnt", line = "Part III Column c")]
    pub recipient_cnt: Option<i32>,

    /// Amount of cash grant
    #[field(xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/CashGrantAmt", line = "Part III Column d")]
    pub cash_grant_amt: Option<i64>,

    /// Manner of cash disbursement
    #[field(
        xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/MannerOfCashDisbursementTxt",
        line = "Part III Column e"
    )]
    pub manner_of_cash_disbursement_txt: Option<String>,

    /// Amount of noncash assistance
    #[field(
        xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/NonCashAssistanceAmt",
        line = "Part III Column f"
    )]
    pub non_cash_assistance_amt: Option<i64>,

    /// Description of noncash assistance
    #[field(
        xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/DescriptionOfNonCashAssistTxt",
        line = "Part III Column g",
        long
    )]
    pub description_of_non_cash_assist_txt: Option<String>,

    /// Method of valuation
    #[field(
        xpath = "/IRS990ScheduleF/ForeignIndividualsGrantsGrp/ValuationMethodUsedDesc",
        line = "Part III Column h",
        long
    )]
    pub valuation_method_used_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedf_part_iv",
    form = "ScheduleF",
    part = "Part IV",
    description = "Foreign forms"
)]
pub struct PartIV {
    pub object_id: String,
    pub ein: String,

    /// Transfer to a foreign corporation
    #[field(xpath = "/IRS990ScheduleF/TransferToForeignCorpInd", line = "Part IV Line 1", max_length = 5)]
    pub transfer_to_foreign_corp_ind: Option<String>,

    /// Grantor or transferor of a foreign trust
    #[field(xpath = "/IRS990ScheduleF/InterestInForeignTrustInd", line = "Part IV Line 2", max_length = 5)]
    pub interest_in_foreign_trust_ind: Option<String>,

    /// Interest in a foreign partnership
    #[field(
        xpath = "/IRS990ScheduleF/InterestInForeignPartnershipInd",
        line = "Part IV Line 4",
        max_length = 5
    )]
    pub interest_in_foreign_partnership_ind: Option<String>,

    /// Operations in or related to a boycotting country
    #[field(xpath = "/IRS990ScheduleF/BoycottCountryInd", line = "Part IV Line 5", max_length = 5)]
    pub boycott_country_ind: Option<String>,

    /// Shareholder of a passive foreign investment company
    #[field(xpath = "/IRS990ScheduleF/PassiveForeignInvstCoInd", line = "Part IV Line 6", max_length = 5)]
    pub passive_foreign_invst_co_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedf_spplmntlinfrmtndtl",
    form = "ScheduleF",
    part = "Part V",
    description = "Supplemental information",
    group = "/IRS990ScheduleF/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleF/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part V"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleF/SupplementalInformationDetail/ExplanationTxt", line = "Part V", long)]
    pub explanation_txt: Option<String>,
}
