//! Schedule A: Public Charity Status and Public Support.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        SupportedOrgInformation::definition(),
        PartII::definition(),
        PartIII::definition(),
        PartIV::definition(),
        PartV::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skeda_part_i",
    form = "ScheduleA",
    part = "Part I",
    description = "Reason for public charity status"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Church, convention of churches or association of churches
    #[field(xpath = "/IRS990ScheduleA/ChurchInd", line = "Part I Line 1", max_length = 5)]
    pub church_ind: Option<String>,

    /// School
    #[field(xpath = "/IRS990ScheduleA/SchoolInd", line = "Part I Line 2", max_length = 5)]
    pub school_ind: Option<String>,

    /// Hospital or cooperative hospital service organization
    #[field(xpath = "/IRS990ScheduleA/HospitalInd", line = "Part I Line 3", max_length = 5)]
    pub hospital_ind: Option<String>,

    /// Medical research organization operated with a hospital
    #[field(xpath = "/IRS990ScheduleA/MedicalResearchOrganizationInd", line = "Part I Line 4", max_length = 5)]
    pub medical_research_organization_ind: Option<String>,

    /// Organization operated for the benefit of a college or university
    #[field(xpath = "/IRS990ScheduleA/CollegeOrganizationInd", line = "Part I Line 5", max_length = 5)]
    pub college_organization_ind: Option<String>,

    /// Federal, state or local government unit
    #[field(xpath = "/IRS990ScheduleA/GovernmentalUnitInd", line = "Part I Line 6", max_length = 5)]
    pub governmental_unit_ind: Option<String>,

    /// Publicly supported organization under 170(b)(1)(A)(vi)
    #[field(xpath = "/IRS990ScheduleA/PublicOrganization170Ind", line = "Part I Line 7", max_length = 5)]
    pub public_organization_170_ind: Option<String>,

    /// Community trust
    #[field(xpath = "/IRS990ScheduleA/CommunityTrustInd", line = "Part I Line 8", max_length = 5)]
    pub community_trust_ind: Option<String>,

    /// Publicly supported organization under 509(a)(2)
    #[field(xpath = "/IRS990ScheduleA/PublicOrganization509a2Ind", line = "Part I Line 10", max_length = 5)]
    pub public_organization_509a2_ind: Option<String>,

    /// Public safety testing organization
    #[field(xpath = "/IRS990ScheduleA/PublicSafetyTestingInd", line = "Part I Line 11", max_length = 5)]
    pub public_safety_testing_ind: Option<String>,

    /// Supporting organization
    #[field(xpath = "/IRS990ScheduleA/SupportingOrganization509a3Ind", line = "Part I Line 12", max_length = 5)]
    pub supporting_organization_509a3_ind: Option<String>,

    /// Type I supporting organization
    #[field(xpath = "/IRS990ScheduleA/SupportingOrgType1Ind", line = "Part I Line 12a", max_length = 5)]
    pub supporting_org_type1_ind: Option<String>,

    /// Number of supported organizations
    #[field(xpath = "/IRS990ScheduleA/SupportedOrganizationsCnt", line = "Part I Line 12f")]
    pub supported_organizations_cnt: Option<i32>,

    /// Total support provided to supported organizations
    #[field(xpath = "/IRS990ScheduleA/SupportedOrganizationsTotalCnt", line = "Part I Line 12g")]
    pub supported_organizations_total_cnt: Option<i32>,

    /// Agricultural research organization
    #[field(xpath = "/IRS990ScheduleA/AgriculturalResearchOrgInd", line = "Part I Line 9", max_length = 5)]
    pub agricultural_research_org_ind: Option<String>,

    /// Type II supporting organization
    #[field(xpath = "/IRS990ScheduleA/SupportingOrgType2Ind", line = "Part I Line 12b", max_length = 5)]
    pub supporting_org_type_2_ind: Option<String>,

    /// Type III functionally integrated supporting organization
    #[field(
        xpath = "/IRS990ScheduleA/SupportingOrgType3FuncIntInd",
        line = "Part I Line 12c",
        max_length = 5
    )]
    pub supporting_org_type_3_func_int_ind: Option<String>,

    /// Type III non-functionally integrated supporting organization
    #[field(
        xpath = "/IRS990ScheduleA/SupportingOrgType3NonFuncInd",
        line = "Part I Line 12d",
        max_length = 5
    )]
    pub supporting_org_type_3_non_func_ind: Option<String>,

    /// IRS written determination of Type I, II or III status
    #[field(xpath = "/IRS990ScheduleA/IRSWrittenDeterminationInd", line = "Part I Line 12e", max_length = 5)]
    pub irs_written_determination_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skeda_spprtdorginfrmtn",
    form = "ScheduleA",
    part = "Part I",
    description = "Supported organizations",
    group = "/IRS990ScheduleA/SupportedOrgInformationGrp",
    parent = "return_skeda_part_i"
)]
pub struct SupportedOrgInformation {
    pub object_id: String,
    pub ein: String,

    /// Name of supported organization
    #[field(
        xpath = "/IRS990ScheduleA/SupportedOrgInformationGrp/SupportedOrganizationName/BusinessNameLine1Txt",
        line = "Part I Line 12g Column i"
    )]
    pub supported_organization_name_txt: Option<String>,

    /// EIN of supported organization
    #[field(
        xpath = "/IRS990ScheduleA/SupportedOrgInformationGrp/EIN",
        line = "Part I Line 12g Column ii",
        name = "SpprtdOrgEIN",
        max_length = 9
    )]
    pub ein_of_supported_org: Option<String>,

    /// Type of organization
    #[field(xpath = "/IRS990ScheduleA/SupportedOrgInformationGrp/OrganizationTypeCd", line = "Part I Line 12g Column iii", max_length = 2)]
    pub organization_type_cd: Option<String>,

    /// Listed in governing document
    #[field(
        xpath = "/IRS990ScheduleA/SupportedOrgInformationGrp/GoverningDocumentListedInd",
        line = "Part I Line 12g Column iv",
        max_length = 5
    )]
    pub governing_document_listed_ind: Option<String>,

    /// Amount of monetary support
    #[field(xpath = "/IRS990ScheduleA/SupportedOrgInformationGrp/SupportAmt", line = "Part I Line 12g Column v")]
    pub support_amt: Option<i64>,

    /// Amount of other support
    #[field(xpath = "/IRS990ScheduleA/SupportedOrgInformationGrp/OtherSupportAmt", line = "Part I Line 12g Column vi")]
    pub other_support_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skeda_part_ii",
    form = "ScheduleA",
    part = "Part II",
    description = "Support schedule for organizations described in 170(b)(1)(A)(iv) and (vi)"
)]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Gifts, grants, contributions and membership fees - current year
    #[field(xpath = "/IRS990ScheduleA/GiftsGrantsContributionsRcvd170Grp/CurrentTaxYearAmt", line = "Part II Line 1 Column e")]
    pub gifts_grants_current_year_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - five year total
    #[field(xpath = "/IRS990ScheduleA/GiftsGrantsContributionsRcvd170Grp/TotalAmt", line = "Part II Line 1 Column f")]
    pub gifts_grants_total_amt: Option<i64>,

    /// Total of lines 1 through 3 - five year total
    #[field(xpath = "/IRS990ScheduleA/TotalCalendarYear170Grp/TotalAmt", line = "Part II Line 4 Column f")]
    pub total_calendar_year_total_amt: Option<i64>,

    /// Public support
    #[field(xpath = "/IRS990ScheduleA/PublicSupportTotal170Amt", line = "Part II Line 6")]
    pub public_support_total_170_amt: Option<i64>,

    /// Total support
    #[field(xpath = "/IRS990ScheduleA/TotalSupportAmt", line = "Part II Line 13")]
    pub total_support_amt: Option<i64>,

    /// Public support percentage for the current year
    #[field(xpath = "/IRS990ScheduleA/PublicSupportCY170Pct", line = "Part II Line 14", alias = "/IRS990ScheduleA/PublicSupportPercentage170")]
    pub public_support_cy_170_pct: Option<f64>,

    /// Public support percentage from the prior year
    #[field(xpath = "/IRS990ScheduleA/PublicSupportPY170Pct", line = "Part II Line 15")]
    pub public_support_py_170_pct: Option<f64>,

    /// 33 1/3% support test - current year
    #[field(xpath = "/IRS990ScheduleA/ThirtyThrSprtTestsCY170Ind", line = "Part II Line 16a", max_length = 5)]
    pub thirty_thr_sprt_tests_cy_170_ind: Option<String>,

    /// 10% facts-and-circumstances test - current year
    #[field(xpath = "/IRS990ScheduleA/TenPctFactsCrcmstncsTestCYInd", line = "Part II Line 17a", max_length = 5)]
    pub ten_pct_facts_crcmstncs_test_cy_ind: Option<String>,

    /// Private foundation
    #[field(xpath = "/IRS990ScheduleA/PrivateFoundation170Ind", line = "Part II Line 18", max_length = 5)]
    pub private_foundation_170_ind: Option<String>,

    /// Gifts, grants, contributions and membership fees - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContributionsRcvd170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 1 Column a"
    )]
    pub gifts_grants_contributions_rcvd_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContributionsRcvd170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 1 Column b"
    )]
    pub gifts_grants_contributions_rcvd_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContributionsRcvd170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 1 Column c"
    )]
    pub gifts_grants_contributions_rcvd_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContributionsRcvd170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 1 Column d"
    )]
    pub gifts_grants_contributions_rcvd_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 2 Column a"
    )]
    pub tax_revenues_levied_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 2 Column b"
    )]
    pub tax_revenues_levied_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 2 Column c"
    )]
    pub tax_revenues_levied_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - prior year
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 2 Column d"
    )]
    pub tax_revenues_levied_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - current year
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied170Grp/CurrentTaxYearAmt",
        line = "Part II Line 2 Column e"
    )]
    pub tax_revenues_levied_170_current_tax_year_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - five year total
    #[field(xpath = "/IRS990ScheduleA/TaxRevenuesLevied170Grp/TotalAmt", line = "Part II Line 2 Column f")]
    pub tax_revenues_levied_170_total_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 3 Column a"
    )]
    pub govt_furn_srvc_fclts_vl_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 3 Column b"
    )]
    pub govt_furn_srvc_fclts_vl_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 3 Column c"
    )]
    pub govt_furn_srvc_fclts_vl_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 3 Column d"
    )]
    pub govt_furn_srvc_fclts_vl_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - current year
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl170Grp/CurrentTaxYearAmt",
        line = "Part II Line 3 Column e"
    )]
    pub govt_furn_srvc_fclts_vl_170_current_tax_year_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - five year total
    #[field(xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl170Grp/TotalAmt", line = "Part II Line 3 Column f")]
    pub govt_furn_srvc_fclts_vl_170_total_amt: Option<i64>,

    /// Total - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalCalendarYear170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 4 Column a"
    )]
    pub total_calendar_year_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Total - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalCalendarYear170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 4 Column b"
    )]
    pub total_calendar_year_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Total - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalCalendarYear170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 4 Column c"
    )]
    pub total_calendar_year_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Total - prior year
    #[field(
        xpath = "/IRS990ScheduleA/TotalCalendarYear170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 4 Column d"
    )]
    pub total_calendar_year_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Total - current year
    #[field(
        xpath = "/IRS990ScheduleA/TotalCalendarYear170Grp/CurrentTaxYearAmt",
        line = "Part II Line 4 Column e"
    )]
    pub total_calendar_year_170_current_tax_year_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 8 Column a"
    )]
    pub gross_investment_income_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 8 Column b"
    )]
    pub gross_investment_income_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 8 Column c"
    )]
    pub gross_investment_income_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 8 Column d"
    )]
    pub gross_investment_income_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - current year
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome170Grp/CurrentTaxYearAmt",
        line = "Part II Line 8 Column e"
    )]
    pub gross_investment_income_170_current_tax_year_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - five year total
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome170Grp/TotalAmt",
        line = "Part II Line 8 Column f"
    )]
    pub gross_investment_income_170_total_amt: Option<i64>,

    /// Net income from unrelated business activities - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessNetIncm170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 9 Column a"
    )]
    pub unrelated_business_net_incm_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Net income from unrelated business activities - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessNetIncm170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 9 Column b"
    )]
    pub unrelated_business_net_incm_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Net income from unrelated business activities - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessNetIncm170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 9 Column c"
    )]
    pub unrelated_business_net_incm_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Net income from unrelated business activities - prior year
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessNetIncm170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 9 Column d"
    )]
    pub unrelated_business_net_incm_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Net income from unrelated business activities - current year
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessNetIncm170Grp/CurrentTaxYearAmt",
        line = "Part II Line 9 Column e"
    )]
    pub unrelated_business_net_incm_170_current_tax_year_amt: Option<i64>,

    /// Net income from unrelated business activities - five year total
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessNetIncm170Grp/TotalAmt",
        line = "Part II Line 9 Column f"
    )]
    pub unrelated_business_net_incm_170_total_amt: Option<i64>,

    /// Other income - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 10 Column a"
    )]
    pub other_income_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Other income - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 10 Column b"
    )]
    pub other_income_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Other income - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 10 Column c"
    )]
    pub other_income_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Other income - prior year
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 10 Column d"
    )]
    pub other_income_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Other income - current year
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome170Grp/CurrentTaxYearAmt",
        line = "Part II Line 10 Column e"
    )]
    pub other_income_170_current_tax_year_amt: Option<i64>,

    /// Other income - five year total
    #[field(xpath = "/IRS990ScheduleA/OtherIncome170Grp/TotalAmt", line = "Part II Line 10 Column f")]
    pub other_income_170_total_amt: Option<i64>,

    /// Total support - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear170Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part II Line 11 Column a"
    )]
    pub total_support_calendar_year_170_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Total support - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear170Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part II Line 11 Column b"
    )]
    pub total_support_calendar_year_170_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Total support - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear170Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part II Line 11 Column c"
    )]
    pub total_support_calendar_year_170_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Total support - prior year
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear170Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part II Line 11 Column d"
    )]
    pub total_support_calendar_year_170_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Total support - current year
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear170Grp/CurrentTaxYearAmt",
        line = "Part II Line 11 Column e"
    )]
    pub total_support_calendar_year_170_current_tax_year_amt: Option<i64>,

    /// Total support - five year total
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear170Grp/TotalAmt",
        line = "Part II Line 11 Column f"
    )]
    pub total_support_calendar_year_170_total_amt: Option<i64>,

    /// Portion of contributions exceeding the 2% limit
    #[field(xpath = "/IRS990ScheduleA/SubstantialContributorsTotAmt", line = "Part II Line 5")]
    pub substantial_contributors_tot_amt: Option<i64>,

    /// Gross receipts from related activities
    #[field(xpath = "/IRS990ScheduleA/GrossReceiptsRltdActivitiesAmt", line = "Part II Line 12")]
    pub gross_receipts_rltd_activities_amt: Option<i64>,

    /// First five years as a 170(b)(1)(A)(vi) organization
    #[field(xpath = "/IRS990ScheduleA/FirstFiveYears170Ind", line = "Part II Line 13", max_length = 5)]
    pub first_five_years_170_ind: Option<String>,

    /// 33 1/3% support test - prior year
    #[field(xpath = "/IRS990ScheduleA/ThirtyThrSprtTestsPY170Ind", line = "Part II Line 16b", max_length = 5)]
    pub thirty_thr_sprt_tests_py_170_ind: Option<String>,

    /// 10% facts and circumstances test - prior year
    #[field(
        xpath = "/IRS990ScheduleA/TenPctFactsCrcmstncsTestPYInd",
        line = "Part II Line 17b",
        max_length = 5
    )]
    pub ten_pct_facts_crcmstncs_test_py_ind: Option<String>,

    /// Explanation of how the facts and circumstances test is met
    #[field(xpath = "/IRS990ScheduleA/FactsAndCircumstancesTestTxt", line = "Part II Line 17", long)]
    pub facts_and_circumstances_test_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skeda_part_iii",
    form = "ScheduleA",
    part = "Part III",
    description = "Support schedule for organizations described in 509(a)(2)"
)]
pub struct PartIII {
    pub object_id: String,
    pub ein: String,

    /// Total support - five year total
    #[field(xpath = "/IRS990ScheduleA/TotalCalendarYear509Grp/TotalAmt", line = "Part III Line 9 Column f")]
    pub total_calendar_year_total_amt: Option<i64>,

    /// Public support percentage for the current year
    #[field(xpath = "/IRS990ScheduleA/PublicSupportCY509Pct", line = "Part III Line 15")]
    pub public_support_cy_509_pct: Option<f64>,

    /// Public support percentage from the prior year
    #[field(xpath = "/IRS990ScheduleA/PublicSupportPY509Pct", line = "Part III Line 16")]
    pub public_support_py_509_pct: Option<f64>,

    /// Investment income percentage for the current year
    #[field(xpath = "/IRS990ScheduleA/InvestmentIncomeCY509Pct", line = "Part III Line 17")]
    pub investment_income_cy_509_pct: Option<f64>,

    /// 33 1/3% support tests - current year
    #[field(xpath = "/IRS990ScheduleA/ThirtyThrSprtTestsCY509Ind", line = "Part III Line 19a", max_length = 5)]
    pub thirty_thr_sprt_tests_cy_509_ind: Option<String>,

    /// Private foundation
    #[field(xpath = "/IRS990ScheduleA/PrivateFoundation509Ind", line = "Part III Line 20", max_length = 5)]
    pub private_foundation_509_ind: Option<String>,

    /// Gifts, grants, contributions and membership fees - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContriRcvd509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 1 Column a"
    )]
    pub gifts_grants_contri_rcvd_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContriRcvd509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 1 Column b"
    )]
    pub gifts_grants_contri_rcvd_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContriRcvd509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 1 Column c"
    )]
    pub gifts_grants_contri_rcvd_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContriRcvd509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 1 Column d"
    )]
    pub gifts_grants_contri_rcvd_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - current year
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContriRcvd509Grp/CurrentTaxYearAmt",
        line = "Part III Line 1 Column e"
    )]
    pub gifts_grants_contri_rcvd_509_current_tax_year_amt: Option<i64>,

    /// Gifts, grants, contributions and membership fees - five year total
    #[field(
        xpath = "/IRS990ScheduleA/GiftsGrantsContriRcvd509Grp/TotalAmt",
        line = "Part III Line 1 Column f"
    )]
    pub gifts_grants_contri_rcvd_509_total_amt: Option<i64>,

    /// Gross receipts from admissions, merchandise sold or services performed - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsAdmissionsGrp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 2 Column a"
    )]
    pub gross_receipts_admissions_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Gross receipts from admissions, merchandise sold or services performed - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsAdmissionsGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 2 Column b"
    )]
    pub gross_receipts_admissions_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Gross receipts from admissions, merchandise sold or services performed - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsAdmissionsGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 2 Column c"
    )]
    pub gross_receipts_admissions_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Gross receipts from admissions, merchandise sold or services performed - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsAdmissionsGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 2 Column d"
    )]
    pub gross_receipts_admissions_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Gross receipts from admissions, merchandise sold or services performed - current year
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsAdmissionsGrp/CurrentTaxYearAmt",
        line = "Part III Line 2 Column e"
    )]
    pub gross_receipts_admissions_current_tax_year_amt: Option<i64>,

    /// Gross receipts from admissions, merchandise sold or services performed - five year total
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsAdmissionsGrp/TotalAmt",
        line = "Part III Line 2 Column f"
    )]
    pub gross_receipts_admissions_total_amt: Option<i64>,

    /// Gross receipts from activities that are not an unrelated trade or business - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsNonUnrltTrBusGrp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 3 Column a"
    )]
    pub gross_receipts_non_unrlt_tr_bus_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Gross receipts from activities that are not an unrelated trade or business - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsNonUnrltTrBusGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 3 Column b"
    )]
    pub gross_receipts_non_unrlt_tr_bus_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Gross receipts from activities that are not an unrelated trade or business - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsNonUnrltTrBusGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 3 Column c"
    )]
    pub gross_receipts_non_unrlt_tr_bus_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Gross receipts from activities that are not an unrelated trade or business - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsNonUnrltTrBusGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 3 Column d"
    )]
    pub gross_receipts_non_unrlt_tr_bus_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Gross receipts from activities that are not an unrelated trade or business - current year
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsNonUnrltTrBusGrp/CurrentTaxYearAmt",
        line = "Part III Line 3 Column e"
    )]
    pub gross_receipts_non_unrlt_tr_bus_current_tax_year_amt: Option<i64>,

    /// Gross receipts from activities that are not an unrelated trade or business - five year total
    #[field(
        xpath = "/IRS990ScheduleA/GrossReceiptsNonUnrltTrBusGrp/TotalAmt",
        line = "Part III Line 3 Column f"
    )]
    pub gross_receipts_non_unrlt_tr_bus_total_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 4 Column a"
    )]
    pub tax_revenues_levied_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 4 Column b"
    )]
    pub tax_revenues_levied_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 4 Column c"
    )]
    pub tax_revenues_levied_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - prior year
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 4 Column d"
    )]
    pub tax_revenues_levied_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - current year
    #[field(
        xpath = "/IRS990ScheduleA/TaxRevenuesLevied509Grp/CurrentTaxYearAmt",
        line = "Part III Line 4 Column e"
    )]
    pub tax_revenues_levied_509_current_tax_year_amt: Option<i64>,

    /// Tax revenues levied for the organization's benefit - five year total
    #[field(xpath = "/IRS990ScheduleA/TaxRevenuesLevied509Grp/TotalAmt", line = "Part III Line 4 Column f")]
    pub tax_revenues_levied_509_total_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 5 Column a"
    )]
    pub govt_furn_srvc_fclts_vl_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 5 Column b"
    )]
    pub govt_furn_srvc_fclts_vl_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 5 Column c"
    )]
    pub govt_furn_srvc_fclts_vl_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 5 Column d"
    )]
    pub govt_furn_srvc_fclts_vl_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - current year
    #[field(
        xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl509Grp/CurrentTaxYearAmt",
        line = "Part III Line 5 Column e"
    )]
    pub govt_furn_srvc_fclts_vl_509_current_tax_year_amt: Option<i64>,

    /// Value of services or facilities furnished by a governmental unit - five year total
    #[field(xpath = "/IRS990ScheduleA/GovtFurnSrvcFcltsVl509Grp/TotalAmt", line = "Part III Line 5 Column f")]
    pub govt_furn_srvc_fclts_vl_509_total_amt: Option<i64>,

    /// Total - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/Total509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 6 Column a"
    )]
    pub total_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Total - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/Total509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 6 Column b"
    )]
    pub total_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Total - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/Total509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 6 Column c"
    )]
    pub total_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Total - prior year
    #[field(
        xpath = "/IRS990ScheduleA/Total509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 6 Column d"
    )]
    pub total_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Total - current year
    #[field(xpath = "/IRS990ScheduleA/Total509Grp/CurrentTaxYearAmt", line = "Part III Line 6 Column e")]
    pub total_509_current_tax_year_amt: Option<i64>,

    /// Total - five year total
    #[field(xpath = "/IRS990ScheduleA/Total509Grp/TotalAmt", line = "Part III Line 6 Column f")]
    pub total_509_total_amt: Option<i64>,

    /// Amounts from disqualified persons - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstantialContributorsAmtGrp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 7a Column a"
    )]
    pub substantial_contributors_amt_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Amounts from disqualified persons - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstantialContributorsAmtGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 7a Column b"
    )]
    pub substantial_contributors_amt_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Amounts from disqualified persons - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstantialContributorsAmtGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 7a Column c"
    )]
    pub substantial_contributors_amt_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Amounts from disqualified persons - prior year
    #[field(
        xpath = "/IRS990ScheduleA/SubstantialContributorsAmtGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 7a Column d"
    )]
    pub substantial_contributors_amt_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Amounts from disqualified persons - current year
    #[field(
        xpath = "/IRS990ScheduleA/SubstantialContributorsAmtGrp/CurrentTaxYearAmt",
        line = "Part III Line 7a Column e"
    )]
    pub substantial_contributors_amt_current_tax_year_amt: Option<i64>,

    /// Amounts from disqualified persons - five year total
    #[field(
        xpath = "/IRS990ScheduleA/SubstantialContributorsAmtGrp/TotalAmt",
        line = "Part III Line 7a Column f"
    )]
    pub substantial_contributors_amt_total_amt: Option<i64>,

    /// Amounts from other than disqualified persons exceeding the limit - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstContriAmtMoreThanGrp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 7b Column a"
    )]
    pub subst_contri_amt_more_than_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Amounts from other than disqualified persons exceeding the limit - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstContriAmtMoreThanGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 7b Column b"
    )]
    pub subst_contri_amt_more_than_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Amounts from other than disqualified persons exceeding the limit - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstContriAmtMoreThanGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 7b Column c"
    )]
    pub subst_contri_amt_more_than_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Amounts from other than disqualified persons exceeding the limit - prior year
    #[field(
        xpath = "/IRS990ScheduleA/SubstContriAmtMoreThanGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 7b Column d"
    )]
    pub subst_contri_amt_more_than_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Amounts from other than disqualified persons exceeding the limit - current year
    #[field(
        xpath = "/IRS990ScheduleA/SubstContriAmtMoreThanGrp/CurrentTaxYearAmt",
        line = "Part III Line 7b Column e"
    )]
    pub subst_contri_amt_more_than_current_tax_year_amt: Option<i64>,

    /// Amounts from other than disqualified persons exceeding the limit - five year total
    #[field(
        xpath = "/IRS990ScheduleA/SubstContriAmtMoreThanGrp/TotalAmt",
        line = "Part III Line 7b Column f"
    )]
    pub subst_contri_amt_more_than_total_amt: Option<i64>,

    /// Add lines 7a and 7b - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstAndDisqualPersonsTotGrp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 7c Column a"
    )]
    pub subst_and_disqual_persons_tot_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Add lines 7a and 7b - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstAndDisqualPersonsTotGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 7c Column b"
    )]
    pub subst_and_disqual_persons_tot_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Add lines 7a and 7b - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/SubstAndDisqualPersonsTotGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 7c Column c"
    )]
    pub subst_and_disqual_persons_tot_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Add lines 7a and 7b - prior year
    #[field(
        xpath = "/IRS990ScheduleA/SubstAndDisqualPersonsTotGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 7c Column d"
    )]
    pub subst_and_disqual_persons_tot_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Add lines 7a and 7b - current year
    #[field(
        xpath = "/IRS990ScheduleA/SubstAndDisqualPersonsTotGrp/CurrentTaxYearAmt",
        line = "Part III Line 7c Column e"
    )]
    pub subst_and_disqual_persons_tot_current_tax_year_amt: Option<i64>,

    /// Add lines 7a and 7b - five year total
    #[field(
        xpath = "/IRS990ScheduleA/SubstAndDisqualPersonsTotGrp/TotalAmt",
        line = "Part III Line 7c Column f"
    )]
    pub subst_and_disqual_persons_tot_total_amt: Option<i64>,

    /// Public support - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/PublicSupportTotal509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 8 Column a"
    )]
    pub public_support_total_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Public support - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/PublicSupportTotal509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 8 Column b"
    )]
    pub public_support_total_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Public support - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/PublicSupportTotal509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 8 Column c"
    )]
    pub public_support_total_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Public support - prior year
    #[field(
        xpath = "/IRS990ScheduleA/PublicSupportTotal509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 8 Column d"
    )]
    pub public_support_total_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Public support - current year
    #[field(
        xpath = "/IRS990ScheduleA/PublicSupportTotal509Grp/CurrentTaxYearAmt",
        line = "Part III Line 8 Column e"
    )]
    pub public_support_total_509_current_tax_year_amt: Option<i64>,

    /// Public support - five year total
    #[field(xpath = "/IRS990ScheduleA/PublicSupportTotal509Grp/TotalAmt", line = "Part III Line 8 Column f")]
    pub public_support_total_509_total_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 10a Column a"
    )]
    pub gross_investment_income_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 10a Column b"
    )]
    pub gross_investment_income_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 10a Column c"
    )]
    pub gross_investment_income_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - prior year
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 10a Column d"
    )]
    pub gross_investment_income_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - current year
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome509Grp/CurrentTaxYearAmt",
        line = "Part III Line 10a Column e"
    )]
    pub gross_investment_income_509_current_tax_year_amt: Option<i64>,

    /// Gross income from interest, dividends, rents and royalties - five year total
    #[field(
        xpath = "/IRS990ScheduleA/GrossInvestmentIncome509Grp/TotalAmt",
        line = "Part III Line 10a Column f"
    )]
    pub gross_investment_income_509_total_amt: Option<i64>,

    /// Unrelated business taxable income - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessTaxIncome509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 10b Column a"
    )]
    pub unrelated_business_tax_income_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Unrelated business taxable income - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessTaxIncome509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 10b Column b"
    )]
    pub unrelated_business_tax_income_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Unrelated business taxable income - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessTaxIncome509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 10b Column c"
    )]
    pub unrelated_business_tax_income_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Unrelated business taxable income - prior year
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessTaxIncome509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 10b Column d"
    )]
    pub unrelated_business_tax_income_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Unrelated business taxable income - current year
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessTaxIncome509Grp/CurrentTaxYearAmt",
        line = "Part III Line 10b Column e"
    )]
    pub unrelated_business_tax_income_509_current_tax_year_amt: Option<i64>,

    /// Unrelated business taxable income - five year total
    #[field(
        xpath = "/IRS990ScheduleA/UnrelatedBusinessTaxIncome509Grp/TotalAmt",
        line = "Part III Line 10b Column f"
    )]
    pub unrelated_business_tax_income_509_total_amt: Option<i64>,

    /// Add lines 10a and 10b - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/InvestmentIncomeAndUBTIGrp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 10c Column a"
    )]
    pub investment_income_and_ubti_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Add lines 10a and 10b - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/InvestmentIncomeAndUBTIGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 10c Column b"
    )]
    pub investment_income_and_ubti_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Add lines 10a and 10b - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/InvestmentIncomeAndUBTIGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 10c Column c"
    )]
    pub investment_income_and_ubti_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Add lines 10a and 10b - prior year
    #[field(
        xpath = "/IRS990ScheduleA/InvestmentIncomeAndUBTIGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 10c Column d"
    )]
    pub investment_income_and_ubti_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Add lines 10a and 10b - current year
    #[field(
        xpath = "/IRS990ScheduleA/InvestmentIncomeAndUBTIGrp/CurrentTaxYearAmt",
        line = "Part III Line 10c Column e"
    )]
    pub investment_income_and_ubti_current_tax_year_amt: Option<i64>,

    /// Add lines 10a and 10b - five year total
    #[field(
        xpath = "/IRS990ScheduleA/InvestmentIncomeAndUBTIGrp/TotalAmt",
        line = "Part III Line 10c Column f"
    )]
    pub investment_income_and_ubti_total_amt: Option<i64>,

    /// Net income from unrelated business activities not included in line 10b - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/NetIncomeFromOtherUBIGrp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 11 Column a"
    )]
    pub net_income_from_other_ubi_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Net income from unrelated business activities not included in line 10b - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/NetIncomeFromOtherUBIGrp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 11 Column b"
    )]
    pub net_income_from_other_ubi_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Net income from unrelated business activities not included in line 10b - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/NetIncomeFromOtherUBIGrp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 11 Column c"
    )]
    pub net_income_from_other_ubi_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Net income from unrelated business activities not included in line 10b - prior year
    #[field(
        xpath = "/IRS990ScheduleA/NetIncomeFromOtherUBIGrp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 11 Column d"
    )]
    pub net_income_from_other_ubi_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Net income from unrelated business activities not included in line 10b - current year
    #[field(
        xpath = "/IRS990ScheduleA/NetIncomeFromOtherUBIGrp/CurrentTaxYearAmt",
        line = "Part III Line 11 Column e"
    )]
    pub net_income_from_other_ubi_current_tax_year_amt: Option<i64>,

    /// Net income from unrelated business activities not included in line 10b - five year total
    #[field(xpath = "/IRS990ScheduleA/NetIncomeFromOtherUBIGrp/TotalAmt", line = "Part III Line 11 Column f")]
    pub net_income_from_other_ubi_total_amt: Option<i64>,

    /// Other income - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 12 Column a"
    )]
    pub other_income_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Other income - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 12 Column b"
    )]
    pub other_income_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Other income - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 12 Column c"
    )]
    pub other_income_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Other income - prior year
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 12 Column d"
    )]
    pub other_income_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Other income - current year
    #[field(
        xpath = "/IRS990ScheduleA/OtherIncome509Grp/CurrentTaxYearAmt",
        line = "Part III Line 12 Column e"
    )]
    pub other_income_509_current_tax_year_amt: Option<i64>,

    /// Other income - five year total
    #[field(xpath = "/IRS990ScheduleA/OtherIncome509Grp/TotalAmt", line = "Part III Line 12 Column f")]
    pub other_income_509_total_amt: Option<i64>,

    /// Total support - four years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear509Grp/CurrentTaxYearMinus4YearsAmt",
        line = "Part III Line 13 Column a"
    )]
    pub total_support_calendar_year_509_current_tax_year_minus_4_years_amt: Option<i64>,

    /// Total support - three years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear509Grp/CurrentTaxYearMinus3YearsAmt",
        line = "Part III Line 13 Column b"
    )]
    pub total_support_calendar_year_509_current_tax_year_minus_3_years_amt: Option<i64>,

    /// Total support - two years prior
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear509Grp/CurrentTaxYearMinus2YearsAmt",
        line = "Part III Line 13 Column c"
    )]
    pub total_support_calendar_year_509_current_tax_year_minus_2_years_amt: Option<i64>,

    /// Total support - prior year
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear509Grp/CurrentTaxYearMinus1YearAmt",
        line = "Part III Line 13 Column d"
    )]
    pub total_support_calendar_year_509_current_tax_year_minus_1_year_amt: Option<i64>,

    /// Total support - current year
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear509Grp/CurrentTaxYearAmt",
        line = "Part III Line 13 Column e"
    )]
    pub total_support_calendar_year_509_current_tax_year_amt: Option<i64>,

    /// Total support - five year total
    #[field(
        xpath = "/IRS990ScheduleA/TotalSupportCalendarYear509Grp/TotalAmt",
        line = "Part III Line 13 Column f"
    )]
    pub total_support_calendar_year_509_total_amt: Option<i64>,

    /// First five years as a 509(a)(2) organization
    #[field(xpath = "/IRS990ScheduleA/FirstFiveYears509Ind", line = "Part III Line 14", max_length = 5)]
    pub first_five_years_509_ind: Option<String>,

    /// Investment income percentage from the prior year
    #[field(xpath = "/IRS990ScheduleA/InvestmentIncomePY509Pct", line = "Part III Line 18")]
    pub investment_income_py_509_pct: Option<f64>,

    /// 33 1/3% support tests - prior year
    #[field(
        xpath = "/IRS990ScheduleA/ThirtyThrSprtTestsPY509Ind",
        line = "Part III Line 19b",
        max_length = 5
    )]
    pub thirty_thr_sprt_tests_py_509_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skeda_part_iv",
    form = "ScheduleA",
    part = "Part IV",
    description = "Supporting organizations"
)]
pub struct PartIV {
    pub object_id: String,
    pub ein: String,

    /// All supported organizations listed by name in governing documents
    #[field(xpath = "/IRS990ScheduleA/AllSupportedOrgListedInd", line = "Section A Line 1", max_length = 5)]
    pub all_supported_org_listed_ind: Option<String>,

    /// Supported organization not organized in the United States
    #[field(
        xpath = "/IRS990ScheduleA/AnySupportedOrgNotOrgnzdUSInd",
        line = "Section A Line 2",
        max_length = 5
    )]
    pub any_supported_org_not_orgnzd_us_ind: Option<String>,

    /// Supported organization may not be described in 509(a)(1) or (2)
    #[field(xpath = "/IRS990ScheduleA/SupportedOrgQualifiedInd", line = "Section A Line 3a", max_length = 5)]
    pub supported_org_qualified_ind: Option<String>,

    /// Support for a foreign supported organization
    #[field(xpath = "/IRS990ScheduleA/SupportAnyForeignOrgInd", line = "Section A Line 4a", max_length = 5)]
    pub support_any_foreign_org_ind: Option<String>,

    /// Supported organizations added, substituted or removed
    #[field(xpath = "/IRS990ScheduleA/SupportedOrgChangedInd", line = "Section A Line 5a", max_length = 5)]
    pub supported_org_changed_ind: Option<String>,

    /// Support provided to non-supported organizations
    #[field(xpath = "/IRS990ScheduleA/SupportNonSupportedOrgInd", line = "Section A Line 6", max_length = 5)]
    pub support_non_supported_org_ind: Option<String>,

    /// Payments to a substantial contributor or related person
    #[field(
        xpath = "/IRS990ScheduleA/PaymentSubstantialContribtrInd",
        line = "Section A Line 7",
        max_length = 5
    )]
    pub payment_substantial_contribtr_ind: Option<String>,

    /// Loans to a disqualified person
    #[field(xpath = "/IRS990ScheduleA/LoanDisqualifiedPersonInd", line = "Section A Line 8", max_length = 5)]
    pub loan_disqualified_person_ind: Option<String>,

    /// Controlled by disqualified persons
    #[field(
        xpath = "/IRS990ScheduleA/ControlledDisqualifiedPrsnInd",
        line = "Section A Line 9a",
        max_length = 5
    )]
    pub controlled_disqualified_prsn_ind: Option<String>,

    /// Subject to the excess business holdings rules
    #[field(
        xpath = "/IRS990ScheduleA/ExcessBusinessHoldingsRulesInd",
        line = "Section A Line 10a",
        max_length = 5
    )]
    pub excess_business_holdings_rules_ind: Option<String>,

    /// Majority of directors or trustees elected by supported organizations
    #[field(
        xpath = "/IRS990ScheduleA/MajorityDirTrstSupportedOrgInd",
        line = "Section B Line 1",
        max_length = 5
    )]
    pub majority_dir_trst_supported_org_ind: Option<String>,

    /// Majority of directors or trustees also those of supported organizations
    #[field(xpath = "/IRS990ScheduleA/ControlledSupportedOrgInd", line = "Section C Line 1", max_length = 5)]
    pub controlled_supported_org_ind: Option<String>,

    /// Required documents provided to supported organizations
    #[field(
        xpath = "/IRS990ScheduleA/DocumentsProvidedSupportedOrgInd",
        line = "Section D Line 1",
        max_length = 5
    )]
    pub documents_provided_supported_org_ind: Option<String>,

    /// Officers have a close and continuous working relationship
    #[field(
        xpath = "/IRS990ScheduleA/OfficersCloseRelationshipInd",
        line = "Section D Line 2",
        max_length = 5
    )]
    pub officers_close_relationship_ind: Option<String>,

    /// Supported organizations have a significant voice in policies
    #[field(xpath = "/IRS990ScheduleA/SupportedOrgVoiceInd", line = "Section D Line 3", max_length = 5)]
    pub supported_org_voice_ind: Option<String>,

    /// Satisfied the activities test
    #[field(xpath = "/IRS990ScheduleA/IntegralPartTestInd", line = "Section E Line 1", max_length = 5)]
    pub integral_part_test_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skeda_part_v",
    form = "ScheduleA",
    part = "Part V",
    description = "Type III non-functionally integrated 509(a)(3) supporting organizations"
)]
pub struct PartV {
    pub object_id: String,
    pub ein: String,

    /// Trust that was integral part of a supported organization before 1970
    #[field(xpath = "/IRS990ScheduleA/TrustIntegralPartTestInd", line = "Part V Line 1", max_length = 5)]
    pub trust_integral_part_test_ind: Option<String>,

    /// Net short-term capital gain - prior year
    #[field(
        xpath = "/IRS990ScheduleA/NetShortTermCapGainAdjNetIncGrp/PriorYearAmt",
        line = "Section A Line 1 Column A"
    )]
    pub net_short_term_cap_gain_adj_net_inc_prior_year_amt: Option<i64>,

    /// Net short-term capital gain - current year
    #[field(
        xpath = "/IRS990ScheduleA/NetShortTermCapGainAdjNetIncGrp/CurrentYearAmt",
        line = "Section A Line 1 Column B"
    )]
    pub net_short_term_cap_gain_adj_net_inc_current_year_amt: Option<i64>,

    /// Recoveries of prior-year distributions - prior year
    #[field(
        xpath = "/IRS990ScheduleA/RecoveriesPYDistributionsGrp/PriorYearAmt",
        line = "Section A Line 2 Column A"
    )]
    pub recoveries_py_distributions_prior_year_amt: Option<i64>,

    /// Recoveries of prior-year distributions - current year
    #[field(
        xpath = "/IRS990ScheduleA/RecoveriesPYDistributionsGrp/CurrentYearAmt",
        line = "Section A Line 2 Column B"
    )]
    pub recoveries_py_distributions_current_year_amt: Option<i64>,

    /// Other gross income - prior year
    #[field(xpath = "/IRS990ScheduleA/OtherGrossIncomeGrp/PriorYearAmt", line = "Section A Line 3 Column A")]
    pub other_gross_income_prior_year_amt: Option<i64>,

    /// Other gross income - current year
    #[field(
        xpath = "/IRS990ScheduleA/OtherGrossIncomeGrp/CurrentYearAmt",
        line = "Section A Line 3 Column B"
    )]
    pub other_gross_income_current_year_amt: Option<i64>,

    /// Add lines 1 through 3 - prior year
    #[field(xpath = "/IRS990ScheduleA/AddLines1Thru3Grp/PriorYearAmt", line = "Section A Line 4 Column A")]
    pub add_lines_1_thru_3_prior_year_amt: Option<i64>,

    /// Add lines 1 through 3 - current year
    #[field(xpath = "/IRS990ScheduleA/AddLines1Thru3Grp/CurrentYearAmt", line = "Section A Line 4 Column B")]
    pub add_lines_1_thru_3_current_year_amt: Option<i64>,

    /// Depreciation and depletion - prior year
    #[field(
        xpath = "/IRS990ScheduleA/DepreciationDepletionGrp/PriorYearAmt",
        line = "Section A Line 5 Column A"
    )]
    pub depreciation_depletion_prior_year_amt: Option<i64>,

    /// Depreciation and depletion - current year
    #[field(
        xpath = "/IRS990ScheduleA/DepreciationDepletionGrp/CurrentYearAmt",
        line = "Section A Line 5 Column B"
    )]
    pub depreciation_depletion_current_year_amt: Option<i64>,

    /// Expenses for the production or collection of gross income - prior year
    #[field(
        xpath = "/IRS990ScheduleA/ExpensesPrdcIncomeGrp/PriorYearAmt",
        line = "Section A Line 6 Column A"
    )]
    pub expenses_prdc_income_prior_year_amt: Option<i64>,

    /// Expenses for the production or collection of gross income - current year
    #[field(
        xpath = "/IRS990ScheduleA/ExpensesPrdcIncomeGrp/CurrentYearAmt",
        line = "Section A Line 6 Column B"
    )]
    pub expenses_prdc_income_current_year_amt: Option<i64>,

    /// Other expenses - prior year
    #[field(xpath = "/IRS990ScheduleA/OtherExpensesGrp/PriorYearAmt", line = "Section A Line 7 Column A")]
    pub other_expenses_prior_year_amt: Option<i64>,

    /// Other expenses - current year
    #[field(xpath = "/IRS990ScheduleA/OtherExpensesGrp/CurrentYearAmt", line = "Section A Line 7 Column B")]
    pub other_expenses_current_year_amt: Option<i64>,

    /// Adjusted net income - prior year
    #[field(xpath = "/IRS990ScheduleA/AdjustedNetIncomeGrp/PriorYearAmt", line = "Section A Line 8 Column A")]
    pub adjusted_net_income_prior_year_amt: Option<i64>,

    /// Adjusted net income - current year
    #[field(
        xpath = "/IRS990ScheduleA/AdjustedNetIncomeGrp/CurrentYearAmt",
        line = "Section A Line 8 Column B"
    )]
    pub adjusted_net_income_current_year_amt: Option<i64>,

    /// Adjusted net income for prior year
    #[field(xpath = "/IRS990ScheduleA/AdjustedNetIncomeDistriAmt", line = "Section C Line 1")]
    pub adjusted_net_income_distri_amt: Option<i64>,

    /// Enter 85% of line 1
    #[field(xpath = "/IRS990ScheduleA/AdjNetIncomeSupportedOrgsAmt", line = "Section C Line 2")]
    pub adj_net_income_supported_orgs_amt: Option<i64>,

    /// Distributable amount for current year
    #[field(xpath = "/IRS990ScheduleA/DistributableAmountCYAmt", line = "Section C Line 6")]
    pub distributable_amount_cy_amt: Option<i64>,

    /// First year as a non-functionally integrated Type III organization
    #[field(xpath = "/IRS990ScheduleA/FirstYearTypeIIINonFuncInd", line = "Section C Line 7", max_length = 5)]
    pub first_year_type_iii_non_func_ind: Option<String>,

    /// Total annual distributions
    #[field(xpath = "/IRS990ScheduleA/TotalAnnualDistributionsAmt", line = "Section D Line 8")]
    pub total_annual_distributions_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skeda_spplmntlinfrmtndtl",
    form = "ScheduleA",
    part = "Part VI",
    description = "Supplemental information",
    group = "/IRS990ScheduleA/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleA/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part VI"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleA/SupplementalInformationDetail/ExplanationTxt", line = "Part VI", long)]
    pub explanation_txt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormTable};

    #[test]
    fn test_percentages_are_decimal() {
        let table = PartII::definition();
        let column = table.column("PblcSpprtCY170Pct").expect("percentage column");
        assert_eq!(column.field_type, FieldType::Decimal);
        assert!(column.matches_xpath("/IRS990ScheduleA/PublicSupportPercentage170"));
    }

    #[test]
    fn test_supported_org_ein_does_not_shadow_key() {
        let table = SupportedOrgInformation::definition();
        assert!(table.has_column("SpprtdOrgEIN"));
        assert!(!table.has_column("EIN"));
        assert!(table.has_column("SpprtdOrgnztnNm_BsnssNmLn1Txt"));
        assert_eq!(table.key_columns()[1].name, "ein");
    }
}
