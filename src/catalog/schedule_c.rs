//! Schedule C: Political Campaign and Lobbying Activities.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        Section527PoliticalOrg::definition(),
        PartIIA::definition(),
        PartIIB::definition(),
        PartIIIA::definition(),
        PartIIIB::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedc_part_i",
    form = "ScheduleC",
    part = "Part I",
    description = "Political campaign activities"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Description of direct and indirect political campaign activities
    #[field(xpath = "/IRS990ScheduleC/PoliticalCampaignActyDesc", line = "Part I-A Line 1", long)]
    pub political_campaign_acty_desc: Option<String>,

    /// Political campaign activity expenditures
    #[field(xpath = "/IRS990ScheduleC/PoliticalExpendituresAmt", line = "Part I-A Line 2")]
    pub political_expenditures_amt: Option<i64>,

    /// Volunteer hours for political campaign activities
    #[field(xpath = "/IRS990ScheduleC/VolunteerHoursCnt", line = "Part I-A Line 3")]
    pub volunteer_hours_cnt: Option<i32>,

    /// Section 4955 excise tax incurred by the organization
    #[field(xpath = "/IRS990ScheduleC/Section4955TaxIncurredOrgAmt", line = "Part I-B Line 1")]
    pub section_4955_tax_incurred_org_amt: Option<i64>,

    /// Section 527 exempt function expenditures
    #[field(xpath = "/IRS990ScheduleC/ExemptFunctionExpendAmt", line = "Part I-C Line 1")]
    pub exempt_function_expend_amt: Option<i64>,

    /// Form 1120-POL filed
    #[field(xpath = "/IRS990ScheduleC/Form1120POLFiledInd", line = "Part I-C Line 4a", max_length = 5)]
    pub form_1120pol_filed_ind: Option<String>,

    /// Section 4955 tax incurred by managers
    #[field(xpath = "/IRS990ScheduleC/Section4955TaxIncurredMgrAmt", line = "Part I-B Line 2")]
    pub section_4955_tax_incurred_mgr_amt: Option<i64>,

    /// Form 4720 filed for the section 4955 tax
    #[field(xpath = "/IRS990ScheduleC/Form4720FiledInd", line = "Part I-B Line 3", max_length = 5)]
    pub form_4720_filed_ind: Option<String>,

    /// Correction made
    #[field(xpath = "/IRS990ScheduleC/CorrectionMadeInd", line = "Part I-B Line 4a", max_length = 5)]
    pub correction_made_ind: Option<String>,

    /// Description of the correction
    #[field(xpath = "/IRS990ScheduleC/CorrectionExplanationTxt", line = "Part I-B Line 4b", long)]
    pub correction_explanation_txt: Option<String>,

    /// Own internal funds contributed to other organizations
    #[field(xpath = "/IRS990ScheduleC/ExemptFunctionExpendIntrnlAmt", line = "Part I-C Line 2")]
    pub exempt_function_expend_intrnl_amt: Option<i64>,

    /// Total exempt function expenditures
    #[field(xpath = "/IRS990ScheduleC/TotalExemptFunctionExpendAmt", line = "Part I-C Line 3")]
    pub total_exempt_function_expend_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedc_sctn527pltclorg",
    form = "ScheduleC",
    part = "Part I-C",
    description = "Section 527 political organizations receiving payments",
    group = "/IRS990ScheduleC/Section527PoliticalOrgGrp",
    parent = "return_skedc_part_i"
)]
pub struct Section527PoliticalOrg {
    pub object_id: String,
    pub ein: String,

    /// Name of organization
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/OrganizationBusinessName/BusinessNameLine1Txt",
        line = "Part I-C Line 5 Column a"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Street address
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/USAddress/AddressLine1Txt",
        line = "Part I-C Line 5 Column b"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/USAddress/CityNm",
        line = "Part I-C Line 5 Column b",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/USAddress/StateAbbreviationCd",
        line = "Part I-C Line 5 Column b",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/USAddress/ZIPCd",
        line = "Part I-C Line 5 Column b",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Employer identification number
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/EIN",
        line = "Part I-C Line 5 Column c",
        name = "PltclOrgEIN",
        max_length = 9
    )]
    pub ein_value: Option<String>,

    /// Amount paid from filing organization's funds
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/PaidInternalFundsAmt",
        line = "Part I-C Line 5 Column d"
    )]
    pub paid_internal_funds_amt: Option<i64>,

    /// Political contributions received and promptly delivered
    #[field(
        xpath = "/IRS990ScheduleC/Section527PoliticalOrgGrp/ContributionsRcvdDeliveredAmt",
        line = "Part I-C Line 5 Column e"
    )]
    pub contributions_rcvd_delivered_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedc_part_iia",
    form = "ScheduleC",
    part = "Part II-A",
    description = "Lobbying expenditures of organizations that filed Form 5768"
)]
pub struct PartIIA {
    pub object_id: String,
    pub ein: String,

    /// Member of an affiliated group
    #[field(xpath = "/IRS990ScheduleC/AffiliatedGroupInd", line = "Part II-A Line A", max_length = 5)]
    pub affiliated_group_ind: Option<String>,

    /// Limited control provisions apply
    #[field(xpath = "/IRS990ScheduleC/LimitedControlInd", line = "Part II-A Line B", max_length = 5)]
    pub limited_control_ind: Option<String>,

    /// Total lobbying expenditures to influence public opinion - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalGrassrootsLobbyingGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1a Column a"
    )]
    pub total_grassroots_lobbying_filing_organizations_total_amt: Option<i64>,

    /// Total lobbying expenditures to influence public opinion - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalGrassrootsLobbyingGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1a Column b"
    )]
    pub total_grassroots_lobbying_affiliated_group_total_amt: Option<i64>,

    /// Total lobbying expenditures to influence a legislative body - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalDirectLobbyingGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1b Column a"
    )]
    pub total_direct_lobbying_filing_organizations_total_amt: Option<i64>,

    /// Total lobbying expenditures to influence a legislative body - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalDirectLobbyingGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1b Column b"
    )]
    pub total_direct_lobbying_affiliated_group_total_amt: Option<i64>,

    /// Total lobbying expenditures - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalLobbyingExpendituresGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1c Column a"
    )]
    pub total_lobbying_expenditures_filing_organizations_total_amt: Option<i64>,

    /// Total lobbying expenditures - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalLobbyingExpendituresGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1c Column b"
    )]
    pub total_lobbying_expenditures_affiliated_group_total_amt: Option<i64>,

    /// Other exempt purpose expenditures - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/OtherExemptPurposeExpendGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1d Column a"
    )]
    pub other_exempt_purpose_expend_filing_organizations_total_amt: Option<i64>,

    /// Other exempt purpose expenditures - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/OtherExemptPurposeExpendGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1d Column b"
    )]
    pub other_exempt_purpose_expend_affiliated_group_total_amt: Option<i64>,

    /// Total exempt purpose expenditures - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalExemptPurposeExpendGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1e Column a"
    )]
    pub total_exempt_purpose_expend_filing_organizations_total_amt: Option<i64>,

    /// Total exempt purpose expenditures - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/TotalExemptPurposeExpendGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1e Column b"
    )]
    pub total_exempt_purpose_expend_affiliated_group_total_amt: Option<i64>,

    /// Lobbying nontaxable amount - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingNontaxableAmountGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1f Column a"
    )]
    pub lobbying_nontaxable_amount_filing_organizations_total_amt: Option<i64>,

    /// Lobbying nontaxable amount - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingNontaxableAmountGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1f Column b"
    )]
    pub lobbying_nontaxable_amount_affiliated_group_total_amt: Option<i64>,

    /// Grassroots nontaxable amount - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsNontaxableAmountGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1g Column a"
    )]
    pub grassroots_nontaxable_amount_filing_organizations_total_amt: Option<i64>,

    /// Grassroots nontaxable amount - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsNontaxableAmountGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1g Column b"
    )]
    pub grassroots_nontaxable_amount_affiliated_group_total_amt: Option<i64>,

    /// Grassroots expenditures over the nontaxable amount - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsTaxableAmountGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1h Column a"
    )]
    pub grassroots_taxable_amount_filing_organizations_total_amt: Option<i64>,

    /// Grassroots expenditures over the nontaxable amount - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsTaxableAmountGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1h Column b"
    )]
    pub grassroots_taxable_amount_affiliated_group_total_amt: Option<i64>,

    /// Lobbying expenditures over the nontaxable amount - filing organization's totals
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingTaxableAmountGrp/FilingOrganizationsTotalAmt",
        line = "Part II-A Line 1i Column a"
    )]
    pub lobbying_taxable_amount_filing_organizations_total_amt: Option<i64>,

    /// Lobbying expenditures over the nontaxable amount - affiliated group totals
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingTaxableAmountGrp/AffiliatedGroupTotalAmt",
        line = "Part II-A Line 1i Column b"
    )]
    pub lobbying_taxable_amount_affiliated_group_total_amt: Option<i64>,

    /// Form 4720 filed for section 4911 tax
    #[field(xpath = "/IRS990ScheduleC/Form4720LobbyingTaxInd", line = "Part II-A Line 1j", max_length = 5)]
    pub form_4720_lobbying_tax_ind: Option<String>,

    /// Lobbying nontaxable amount - three years prior
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingNontxblAmtAvgGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II-A Line 2a Column a"
    )]
    pub lobbying_nontxbl_amt_avg_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Lobbying nontaxable amount - two years prior
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingNontxblAmtAvgGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II-A Line 2a Column b"
    )]
    pub lobbying_nontxbl_amt_avg_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Lobbying nontaxable amount - prior year
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingNontxblAmtAvgGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part II-A Line 2a Column c"
    )]
    pub lobbying_nontxbl_amt_avg_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Lobbying nontaxable amount - current year
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingNontxblAmtAvgGrp/CurrentTaxYearAmt",
        line = "Part II-A Line 2a Column d"
    )]
    pub lobbying_nontxbl_amt_avg_current_tax_year_amt: Option<i64>,

    /// Lobbying nontaxable amount - total
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingNontxblAmtAvgGrp/TotalAmt",
        line = "Part II-A Line 2a Column e"
    )]
    pub lobbying_nontxbl_amt_avg_total_amt: Option<i64>,

    /// Lobbying ceiling amount - three years prior
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingCeilingAmtAvgGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II-A Line 2b Column a"
    )]
    pub lobbying_ceiling_amt_avg_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Lobbying ceiling amount - two years prior
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingCeilingAmtAvgGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II-A Line 2b Column b"
    )]
    pub lobbying_ceiling_amt_avg_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Lobbying ceiling amount - prior year
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingCeilingAmtAvgGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part II-A Line 2b Column c"
    )]
    pub lobbying_ceiling_amt_avg_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Lobbying ceiling amount - current year
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingCeilingAmtAvgGrp/CurrentTaxYearAmt",
        line = "Part II-A Line 2b Column d"
    )]
    pub lobbying_ceiling_amt_avg_current_tax_year_amt: Option<i64>,

    /// Lobbying ceiling amount - total
    #[field(
        xpath = "/IRS990ScheduleC/LobbyingCeilingAmtAvgGrp/TotalAmt",
        line = "Part II-A Line 2b Column e"
    )]
    pub lobbying_ceiling_amt_avg_total_amt: Option<i64>,

    /// Total lobbying expenditures - three years prior
    #[field(
        xpath = "/IRS990ScheduleC/TotalLobbyingExpendAvgGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II-A Line 2c Column a"
    )]
    pub total_lobbying_expend_avg_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Total lobbying expenditures - two years prior
    #[field(
        xpath = "/IRS990ScheduleC/TotalLobbyingExpendAvgGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II-A Line 2c Column b"
    )]
    pub total_lobbying_expend_avg_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Total lobbying expenditures - prior year
    #[field(
        xpath = "/IRS990ScheduleC/TotalLobbyingExpendAvgGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part II-A Line 2c Column c"
    )]
    pub total_lobbying_expend_avg_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Total lobbying expenditures - current year
    #[field(
        xpath = "/IRS990ScheduleC/TotalLobbyingExpendAvgGrp/CurrentTaxYearAmt",
        line = "Part II-A Line 2c Column d"
    )]
    pub total_lobbying_expend_avg_current_tax_year_amt: Option<i64>,

    /// Total lobbying expenditures - total
    #[field(
        xpath = "/IRS990ScheduleC/TotalLobbyingExpendAvgGrp/TotalAmt",
        line = "Part II-A Line 2c Column e"
    )]
    pub total_lobbying_expend_avg_total_amt: Option<i64>,

    /// Grassroots nontaxable amount - three years prior
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsNontxblAmtAvgGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II-A Line 2d Column a"
    )]
    pub grassroots_nontxbl_amt_avg_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Grassroots nontaxable amount - two years prior
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsNontxblAmtAvgGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II-A Line 2d Column b"
    )]
    pub grassroots_nontxbl_amt_avg_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Grassroots nontaxable amount - prior year
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsNontxblAmtAvgGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part II-A Line 2d Column c"
    )]
    pub grassroots_nontxbl_amt_avg_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Grassroots nontaxable amount - current year
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsNontxblAmtAvgGrp/CurrentTaxYearAmt",
        line = "Part II-A Line 2d Column d"
    )]
    pub grassroots_nontxbl_amt_avg_current_tax_year_amt: Option<i64>,

    /// Grassroots nontaxable amount - total
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsNontxblAmtAvgGrp/TotalAmt",
        line = "Part II-A Line 2d Column e"
    )]
    pub grassroots_nontxbl_amt_avg_total_amt: Option<i64>,

    /// Grassroots ceiling amount - three years prior
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsCeilingAmtAvgGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II-A Line 2e Column a"
    )]
    pub grassroots_ceiling_amt_avg_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Grassroots ceiling amount - two years prior
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsCeilingAmtAvgGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II-A Line 2e Column b"
    )]
    pub grassroots_ceiling_amt_avg_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Grassroots ceiling amount - prior year
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsCeilingAmtAvgGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part II-A Line 2e Column c"
    )]
    pub grassroots_ceiling_amt_avg_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Grassroots ceiling amount - current year
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsCeilingAmtAvgGrp/CurrentTaxYearAmt",
        line = "Part II-A Line 2e Column d"
    )]
    pub grassroots_ceiling_amt_avg_current_tax_year_amt: Option<i64>,

    /// Grassroots ceiling amount - total
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsCeilingAmtAvgGrp/TotalAmt",
        line = "Part II-A Line 2e Column e"
    )]
    pub grassroots_ceiling_amt_avg_total_amt: Option<i64>,

    /// Grassroots lobbying expenditures - three years prior
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsLobbyingExpendAvgGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II-A Line 2f Column a"
    )]
    pub grassroots_lobbying_expend_avg_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Grassroots lobbying expenditures - two years prior
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsLobbyingExpendAvgGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II-A Line 2f Column b"
    )]
    pub grassroots_lobbying_expend_avg_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Grassroots lobbying expenditures - prior year
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsLobbyingExpendAvgGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part II-A Line 2f Column c"
    )]
    pub grassroots_lobbying_expend_avg_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Grassroots lobbying expenditures - current year
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsLobbyingExpendAvgGrp/CurrentTaxYearAmt",
        line = "Part II-A Line 2f Column d"
    )]
    pub grassroots_lobbying_expend_avg_current_tax_year_amt: Option<i64>,

    /// Grassroots lobbying expenditures - total
    #[field(
        xpath = "/IRS990ScheduleC/GrassrootsLobbyingExpendAvgGrp/TotalAmt",
        line = "Part II-A Line 2f Column e"
    )]
    pub grassroots_lobbying_expend_avg_total_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedc_part_iib",
    form = "ScheduleC",
    part = "Part II-B",
    description = "Lobbying activities of organizations that did not file Form 5768"
)]
pub struct PartIIB {
    pub object_id: String,
    pub ein: String,

    /// Volunteers
    #[field(xpath = "/IRS990ScheduleC/VolunteersInd", line = "Part II-B Line 1a", max_length = 5)]
    pub volunteers_ind: Option<String>,

    /// Paid staff or management
    #[field(xpath = "/IRS990ScheduleC/PaidStaffOrManagementInd", line = "Part II-B Line 1b", max_length = 5)]
    pub paid_staff_or_management_ind: Option<String>,

    /// Media advertisements
    #[field(xpath = "/IRS990ScheduleC/MediaAdvertisementsInd", line = "Part II-B Line 1c", max_length = 5)]
    pub media_advertisements_ind: Option<String>,

    /// Mailings to members, legislators or the public
    #[field(xpath = "/IRS990ScheduleC/MailingsMembersInd", line = "Part II-B Line 1d", max_length = 5)]
    pub mailings_members_ind: Option<String>,

    /// Grants to other organizations for lobbying purposes
    #[field(xpath = "/IRS990ScheduleC/GrantsOtherOrganizationsAmt", line = "Part II-B Line 1g")]
    pub grants_other_organizations_amt: Option<i64>,

    /// Direct contact with legislators or officials
    #[field(xpath = "/IRS990ScheduleC/DirectContactLegislatorsAmt", line = "Part II-B Line 1h")]
    pub direct_contact_legislators_amt: Option<i64>,

    /// Total lobbying expenditures
    #[field(xpath = "/IRS990ScheduleC/TotalLobbyingExpendGrp/TotalAmt", line = "Part II-B Line 1j")]
    pub total_lobbying_expend_total_amt: Option<i64>,

    /// Not described in section 501(c)(3)
    #[field(xpath = "/IRS990ScheduleC/NotDescribedSection501c3Ind", line = "Part II-B Line 2a", max_length = 5)]
    pub not_described_section_501c3_ind: Option<String>,

    /// Media advertisements - amount
    #[field(xpath = "/IRS990ScheduleC/MediaAdvertisementsAmt", line = "Part II-B Line 1c")]
    pub media_advertisements_amt: Option<i64>,

    /// Mailings to members, legislators or the public - amount
    #[field(xpath = "/IRS990ScheduleC/MailingsMembersAmt", line = "Part II-B Line 1d")]
    pub mailings_members_amt: Option<i64>,

    /// Publications or published or broadcast statements
    #[field(
        xpath = "/IRS990ScheduleC/PublicationsOrBroadcastInd",
        line = "Part II-B Line 1e",
        max_length = 5
    )]
    pub publications_or_broadcast_ind: Option<String>,

    /// Publications or published or broadcast statements - amount
    #[field(xpath = "/IRS990ScheduleC/PublicationsOrBroadcastAmt", line = "Part II-B Line 1e")]
    pub publications_or_broadcast_amt: Option<i64>,

    /// Grants to other organizations for lobbying purposes
    #[field(
        xpath = "/IRS990ScheduleC/GrantsOtherOrganizationsInd",
        line = "Part II-B Line 1f",
        max_length = 5
    )]
    pub grants_other_organizations_ind: Option<String>,

    /// Direct contact with legislators or officials
    #[field(
        xpath = "/IRS990ScheduleC/DirectContactLegislatorsInd",
        line = "Part II-B Line 1g",
        max_length = 5
    )]
    pub direct_contact_legislators_ind: Option<String>,

    /// Rallies, demonstrations, seminars or conventions
    #[field(xpath = "/IRS990ScheduleC/RalliesDemonstrationsInd", line = "Part II-B Line 1h", max_length = 5)]
    pub rallies_demonstrations_ind: Option<String>,

    /// Rallies, demonstrations, seminars or conventions - amount
    #[field(xpath = "/IRS990ScheduleC/RalliesDemonstrationsAmt", line = "Part II-B Line 1h")]
    pub rallies_demonstrations_amt: Option<i64>,

    /// Other lobbying activities
    #[field(xpath = "/IRS990ScheduleC/OtherActivitiesInd", line = "Part II-B Line 1i", max_length = 5)]
    pub other_activities_ind: Option<String>,

    /// Other lobbying activities - amount
    #[field(xpath = "/IRS990ScheduleC/OtherActivitiesAmt", line = "Part II-B Line 1i")]
    pub other_activities_amt: Option<i64>,

    /// Section 4912 tax incurred by the organization
    #[field(xpath = "/IRS990ScheduleC/Section4912TaxOrgAmt", line = "Part II-B Line 2b")]
    pub section_4912_tax_org_amt: Option<i64>,

    /// Section 4912 tax incurred by managers
    #[field(xpath = "/IRS990ScheduleC/Section4912TaxManagersAmt", line = "Part II-B Line 2c")]
    pub section_4912_tax_managers_amt: Option<i64>,

    /// Form 4720 filed for the section 4912 tax
    #[field(xpath = "/IRS990ScheduleC/Form4720FiledLobbyingInd", line = "Part II-B Line 2d", max_length = 5)]
    pub form_4720_filed_lobbying_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedc_part_iiia",
    form = "ScheduleC",
    part = "Part III-A",
    description = "Organizations exempt under 501(c)(4), (5) or (6)"
)]
pub struct PartIIIA {
    pub object_id: String,
    pub ein: String,

    /// Substantially all dues nondeductible by members
    #[field(
        xpath = "/IRS990ScheduleC/SubstantiallyAllDuesNondedInd",
        line = "Part III-A Line 1",
        max_length = 5
    )]
    pub substantially_all_dues_nonded_ind: Option<String>,

    /// Only in-house lobbying expenditures of $2,000 or less
    #[field(xpath = "/IRS990ScheduleC/OnlyInHouseLobbyingInd", line = "Part III-A Line 2", max_length = 5)]
    pub only_in_house_lobbying_ind: Option<String>,

    /// Agreed to carry over lobbying expenditures from the prior year
    #[field(
        xpath = "/IRS990ScheduleC/AgreeCarryoverPriorYearInd",
        line = "Part III-A Line 3",
        max_length = 5
    )]
    pub agree_carryover_prior_year_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedc_part_iiib",
    form = "ScheduleC",
    part = "Part III-B",
    description = "Lobbying and political expenditures of 501(c)(4), (5) or (6) organizations"
)]
pub struct PartIIIB {
    pub object_id: String,
    pub ein: String,

    /// Dues, assessments and similar amounts from members
    #[field(xpath = "/IRS990ScheduleC/DuesAssessmentsAmt", line = "Part III-B Line 1")]
    pub dues_assessments_amt: Option<i64>,

    /// Current year section 162(e) nondeductible expenditures
    #[field(xpath = "/IRS990ScheduleC/NondeductibleLobbyingPolCYAmt", line = "Part III-B Line 2a")]
    pub nondeductible_lobbying_pol_cy_amt: Option<i64>,

    /// Carryover from last year
    #[field(xpath = "/IRS990ScheduleC/CarryoverFromLastYearAmt", line = "Part III-B Line 2b")]
    pub carryover_from_last_year_amt: Option<i64>,

    /// Total nondeductible lobbying and political expenditures
    #[field(xpath = "/IRS990ScheduleC/TotalLobbyingPolExpendAmt", line = "Part III-B Line 2c")]
    pub total_lobbying_pol_expend_amt: Option<i64>,

    /// Aggregate amount reported in dues notices
    #[field(xpath = "/IRS990ScheduleC/AggregateReportedDuesNoticeAmt", line = "Part III-B Line 3")]
    pub aggregate_reported_dues_notice_amt: Option<i64>,

    /// Amount carried over to the next year
    #[field(xpath = "/IRS990ScheduleC/CarryoverToNextYearAmt", line = "Part III-B Line 4")]
    pub carryover_to_next_year_amt: Option<i64>,

    /// Taxable amount of lobbying and political expenditures
    #[field(xpath = "/IRS990ScheduleC/TaxableLobbyingPolExpendAmt", line = "Part III-B Line 5")]
    pub taxable_lobbying_pol_expend_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedc_spplmntlinfrmtndtl",
    form = "ScheduleC",
    part = "Part IV",
    description = "Supplemental information",
    group = "/IRS990ScheduleC/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleC/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part IV"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleC/SupplementalInformationDetail/ExplanationTxt", line = "Part IV", long)]
    pub explanation_txt: Option<String>,
}
