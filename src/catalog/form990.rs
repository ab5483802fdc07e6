//! Form 990: Return of Organization Exempt From Income Tax.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        Part0::definition(),
        PartI::definition(),
        PartII::definition(),
        PartIII::definition(),
        ProgSrvcAccomActyOther::definition(),
        PartIV::definition(),
        PartV::definition(),
        PartVI::definition(),
        PartVII::definition(),
        Form990PartVIISectionA::definition(),
        ContractorCompensation::definition(),
        PartVIII::definition(),
        ProgramServiceRevenue::definition(),
        OtherRevenueMisc::definition(),
        PartIX::definition(),
        OtherExpenses::definition(),
        PartX::definition(),
        PartXI::definition(),
        PartXII::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_part_0",
    form = "Form990",
    part = "Part 0",
    description = "Heading: organization identity and return status"
)]
pub struct Part0 {
    pub object_id: String,
    pub ein: String,

    /// Initial return
    #[field(xpath = "/IRS990/InitialReturnInd", line = "Heading Line B", max_length = 5)]
    pub initial_return_ind: Option<String>,

    /// Final return / terminated
    #[field(xpath = "/IRS990/FinalReturnInd", line = "Heading Line B", max_length = 5)]
    pub final_return_ind: Option<String>,

    /// Address change
    #[field(xpath = "/IRS990/AddressChangeInd", line = "Heading Line B", max_length = 5)]
    pub address_change_ind: Option<String>,

    /// Amended return
    #[field(xpath = "/IRS990/AmendedReturnInd", line = "Heading Line B", max_length = 5)]
    pub amended_return_ind: Option<String>,

    /// Name and address of principal officer
    #[field(xpath = "/IRS990/PrincipalOfficerNm", line = "Heading Line F", alias = "/IRS990/PrincipalOfficerName")]
    pub principal_officer_nm: Option<String>,

    /// Principal officer street address
    #[field(xpath = "/IRS990/USAddress/AddressLine1Txt", line = "Heading Line F", max_length = 35)]
    pub us_address_line1_txt: Option<String>,

    /// Principal officer city
    #[field(xpath = "/IRS990/USAddress/CityNm", line = "Heading Line F", max_length = 22)]
    pub us_address_city_nm: Option<String>,

    /// Principal officer state
    #[field(xpath = "/IRS990/USAddress/StateAbbreviationCd", line = "Heading Line F", max_length = 2)]
    pub us_address_state_abbreviation_cd: Option<String>,

    /// Principal officer ZIP code
    #[field(xpath = "/IRS990/USAddress/ZIPCd", line = "Heading Line F", max_length = 10)]
    pub us_address_zip_cd: Option<String>,

    /// Gross receipts
    #[field(xpath = "/IRS990/GrossReceiptsAmt", line = "Heading Line G", alias = "/IRS990/GrossReceipts")]
    pub gross_receipts_amt: Option<i64>,

    /// Group return for subordinates
    #[field(xpath = "/IRS990/GroupReturnForAffiliatesInd", line = "Heading Line H(a)", max_length = 5)]
    pub group_return_for_affiliates_ind: Option<String>,

    /// Group exemption number
    #[field(xpath = "/IRS990/GroupExemptionNum", line = "Heading Line H(c)", max_length = 4)]
    pub group_exemption_num: Option<String>,

    /// Tax-exempt status 501(c)(3)
    #[field(xpath = "/IRS990/Organization501c3Ind", line = "Heading Line I", max_length = 5)]
    pub organization_501c3_ind: Option<String>,

    /// Tax-exempt status 501(c)
    #[field(xpath = "/IRS990/Organization501cInd", line = "Heading Line I", max_length = 5)]
    pub organization_501c_ind: Option<String>,

    /// Tax-exempt status 4947(a)(1)
    #[field(xpath = "/IRS990/Organization4947a1NotPFInd", line = "Heading Line I", max_length = 5)]
    pub organization_4947a1_not_pf_ind: Option<String>,

    /// Tax-exempt status 527
    #[field(xpath = "/IRS990/Organization527Ind", line = "Heading Line I", max_length = 5)]
    pub organization_527_ind: Option<String>,

    /// Website
    #[field(xpath = "/IRS990/WebsiteAddressTxt", line = "Heading Line J", alias = "/IRS990/WebSite")]
    pub website_address_txt: Option<String>,

    /// Form of organization: corporation
    #[field(xpath = "/IRS990/TypeOfOrganizationCorpInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_corp_ind: Option<String>,

    /// Form of organization: trust
    #[field(xpath = "/IRS990/TypeOfOrganizationTrustInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_trust_ind: Option<String>,

    /// Form of organization: association
    #[field(xpath = "/IRS990/TypeOfOrganizationAssocInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_assoc_ind: Option<String>,

    /// Year of formation
    #[field(xpath = "/IRS990/FormationYr", line = "Heading Line L", alias = "/IRS990/YearFormation")]
    pub formation_yr: Option<i32>,

    /// State of legal domicile
    #[field(xpath = "/IRS990/LegalDomicileStateCd", line = "Heading Line M", max_length = 2)]
    pub legal_domicile_state_cd: Option<String>,

    /// Name change
    #[field(xpath = "/IRS990/NameChangeInd", line = "Heading Line B", max_length = 5)]
    pub name_change_ind: Option<String>,

    /// Application pending
    #[field(xpath = "/IRS990/ApplicationPendingInd", line = "Heading Line B", max_length = 5)]
    pub application_pending_ind: Option<String>,

    /// Doing business as
    #[field(xpath = "/IRS990/DoingBusinessAsName/BusinessNameLine1Txt", line = "Heading Line C")]
    pub business_name_line_1_txt: Option<String>,

    /// Principal officer address, second line
    #[field(xpath = "/IRS990/USAddress/AddressLine2Txt", line = "Heading Line F")]
    pub us_address_line2_txt: Option<String>,

    /// Principal officer foreign address
    #[field(xpath = "/IRS990/ForeignAddress/AddressLine1Txt", line = "Heading Line F")]
    pub foreign_address_line1_txt: Option<String>,

    /// Principal officer foreign city
    #[field(xpath = "/IRS990/ForeignAddress/CityNm", line = "Heading Line F")]
    pub foreign_address_city_nm: Option<String>,

    /// Principal officer foreign province or state
    #[field(xpath = "/IRS990/ForeignAddress/ProvinceOrStateNm", line = "Heading Line F")]
    pub foreign_address_province_nm: Option<String>,

    /// Principal officer country
    #[field(xpath = "/IRS990/ForeignAddress/CountryCd", line = "Heading Line F", max_length = 2)]
    pub foreign_address_country_cd: Option<String>,

    /// Principal officer foreign postal code
    #[field(xpath = "/IRS990/ForeignAddress/ForeignPostalCd", line = "Heading Line F")]
    pub foreign_address_postal_cd: Option<String>,

    /// Principal officer business name
    #[field(xpath = "/IRS990/PrincipalOfcrBusinessName/BusinessNameLine1Txt", line = "Heading Line F")]
    pub principal_ofcr_business_name_business_name_line_1_txt: Option<String>,

    /// All affiliates included
    #[field(xpath = "/IRS990/AllAffiliatesIncludedInd", line = "Heading Line H(b)", max_length = 5)]
    pub all_affiliates_included_ind: Option<String>,

    /// Form of organization: other
    #[field(xpath = "/IRS990/TypeOfOrganizationOtherInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_other_ind: Option<String>,

    /// Form of organization described
    #[field(xpath = "/IRS990/OtherOrganizationDsc", line = "Heading Line K")]
    pub other_organization_dsc: Option<String>,

    /// Country of legal domicile
    #[field(xpath = "/IRS990/LegalDomicileCountryCd", line = "Heading Line M")]
    pub legal_domicile_country_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_part_i", form = "Form990", part = "Part I", description = "Summary")]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Briefly describe the organization's mission or most significant activities
    #[field(
        xpath = "/IRS990/ActivityOrMissionDesc",
        line = "Part I Line 1",
        long,
        alias = "/IRS990/ActivityOrMissionDescription"
    )]
    pub activity_or_mission_desc: Option<String>,

    /// Organization discontinued operations or disposed of more than 25% of net assets
    #[field(xpath = "/IRS990/ContractTerminationInd", line = "Part I Line 2", max_length = 5)]
    pub contract_termination_ind: Option<String>,

    /// Number of voting members of the governing body
    #[field(
        xpath = "/IRS990/VotingMembersGoverningBodyCnt",
        line = "Part I Line 3",
        alias = "/IRS990/NbrVotingMembersGoverningBody"
    )]
    pub voting_members_governing_body_cnt: Option<i32>,

    /// Number of independent voting members of the governing body
    #[field(
        xpath = "/IRS990/VotingMembersIndependentCnt",
        line = "Part I Line 4",
        alias = "/IRS990/NbrIndependentVotingMembers"
    )]
    pub voting_members_independent_cnt: Option<i32>,

    /// Total number of individuals employed in calendar year
    #[field(xpath = "/IRS990/TotalEmployeeCnt", line = "Part I Line 5", alias = "/IRS990/TotalNbrEmployees")]
    pub total_employee_cnt: Option<i32>,

    /// Total number of volunteers
    #[field(xpath = "/IRS990/TotalVolunteersCnt", line = "Part I Line 6", alias = "/IRS990/TotalNbrVolunteers")]
    pub total_volunteers_cnt: Option<i32>,

    /// Total unrelated business revenue
    #[field(xpath = "/IRS990/TotalGrossUBIAmt", line = "Part I Line 7a", alias = "/IRS990/TotalGrossUBI")]
    pub total_gross_ubi_amt: Option<i64>,

    /// Net unrelated business taxable income
    #[field(xpath = "/IRS990/NetUnrelatedBusTxblIncmAmt", line = "Part I Line 7b", alias = "/IRS990/NetUnrelatedBusinessTxblIncome")]
    pub net_unrelated_bus_txbl_incm_amt: Option<i64>,

    /// Contributions and grants - prior year
    #[field(xpath = "/IRS990/PYContributionsGrantsAmt", line = "Part I Line 8", alias = "/IRS990/ContributionsGrantsPriorYear")]
    pub py_contributions_grants_amt: Option<i64>,

    /// Contributions and grants - current year
    #[field(xpath = "/IRS990/CYContributionsGrantsAmt", line = "Part I Line 8", alias = "/IRS990/ContributionsGrantsCurrentYear")]
    pub cy_contributions_grants_amt: Option<i64>,

    /// Program service revenue - prior year
    #[field(xpath = "/IRS990/PYProgramServiceRevenueAmt", line = "Part I Line 9", alias = "/IRS990/ProgramServiceRevenuePriorYear")]
    pub py_program_service_revenue_amt: Option<i64>,

    /// Program service revenue - current year
    #[field(xpath = "/IRS990/CYProgramServiceRevenueAmt", line = "Part I Line 9", alias = "/IRS990/ProgramServiceRevenueCY")]
    pub cy_program_service_revenue_amt: Option<i64>,

    /// Investment income - prior year
    #[field(xpath = "/IRS990/PYInvestmentIncomeAmt", line = "Part I Line 10", alias = "/IRS990/InvestmentIncomePriorYear")]
    pub py_investment_income_amt: Option<i64>,

    /// Investment income - current year
    #[field(xpath = "/IRS990/CYInvestmentIncomeAmt", line = "Part I Line 10", alias = "/IRS990/InvestmentIncomeCurrentYear")]
    pub cy_investment_income_amt: Option<i64>,

    /// Other revenue - prior year
    #[field(xpath = "/IRS990/PYOtherRevenueAmt", line = "Part I Line 11", alias = "/IRS990/OtherRevenuePriorYear")]
    pub py_other_revenue_amt: Option<i64>,

    /// Other revenue - current year
    #[field(xpath = "/IRS990/CYOtherRevenueAmt", line = "Part I Line 11", alias = "/IRS990/OtherRevenueCurrentYear")]
    pub cy_other_revenue_amt: Option<i64>,

    /// Total revenue - prior year
    #[field(xpath = "/IRS990/PYTotalRevenueAmt", line = "Part I Line 12", alias = "/IRS990/TotalRevenuePriorYear")]
    pub py_total_revenue_amt: Option<i64>,

    /// Total revenue - current year
    #[field(xpath = "/IRS990/CYTotalRevenueAmt", line = "Part I Line 12", alias = "/IRS990/TotalRevenueCurrentYear")]
    pub cy_total_revenue_amt: Option<i64>,

    /// Grants and similar amounts paid - prior year
    #[field(xpath = "/IRS990/PYGrantsAndSimilarPaidAmt", line = "Part I Line 13", alias = "/IRS990/GrantsAndSimilarAmntsPriorYear")]
    pub py_grants_and_similar_paid_amt: Option<i64>,

    /// Grants and similar amounts paid - current year
    #[field(xpath = "/IRS990/CYGrantsAndSimilarPaidAmt", line = "Part I Line 13", alias = "/IRS990/GrantsAndSimilarAmntsCY")]
    pub cy_grants_and_similar_paid_amt: Option<i64>,

    /// Benefits paid to or for members - prior year
    #[field(xpath = "/IRS990/PYBenefitsPaidToMembersAmt", line = "Part I Line 14")]
    pub py_benefits_paid_to_members_amt: Option<i64>,

    /// Benefits paid to or for members - current year
    #[field(xpath = "/IRS990/CYBenefitsPaidToMembersAmt", line = "Part I Line 14")]
    pub cy_benefits_paid_to_members_amt: Option<i64>,

    /// Salaries, other compensation, employee benefits - prior year
    #[field(xpath = "/IRS990/PYSalariesCompEmpBnftPaidAmt", line = "Part I Line 15", alias = "/IRS990/SalariesEtcPriorYear")]
    pub py_salaries_comp_emp_bnft_paid_amt: Option<i64>,

    /// Salaries, other compensation, employee benefits - current year
    #[field(xpath = "/IRS990/CYSalariesCompEmpBnftPaidAmt", line = "Part I Line 15", alias = "/IRS990/SalariesEtcCurrentYear")]
    pub cy_salaries_comp_emp_bnft_paid_amt: Option<i64>,

    /// Professional fundraising fees - prior year
    #[field(xpath = "/IRS990/PYTotalProfFndrsngExpnsAmt", line = "Part I Line 16a")]
    pub py_total_prof_fndrsng_expns_amt: Option<i64>,

    /// Professional fundraising fees - current year
    #[field(xpath = "/IRS990/CYTotalProfFndrsngExpnsAmt", line = "Part I Line 16a")]
    pub cy_total_prof_fndrsng_expns_amt: Option<i64>,

    /// Total fundraising expenses - current year
    #[field(xpath = "/IRS990/CYTotalFundraisingExpenseAmt", line = "Part I Line 16b", alias = "/IRS990/TotalFundrsngExpCurrentYear")]
    pub cy_total_fundraising_expense_amt: Option<i64>,

    /// Other expenses - prior year
    #[field(xpath = "/IRS990/PYOtherExpensesAmt", line = "Part I Line 17", alias = "/IRS990/OtherExpensePriorYear")]
    pub py_other_expenses_amt: Option<i64>,

    /// Other expenses - current year
    #[field(xpath = "/IRS990/CYOtherExpensesAmt", line = "Part I Line 17", alias = "/IRS990/OtherExpensesCurrentYear")]
    pub cy_other_expenses_amt: Option<i64>,

    /// Total expenses - prior year
    #[field(xpath = "/IRS990/PYTotalExpensesAmt", line = "Part I Line 18", alias = "/IRS990/TotalExpensesPriorYear")]
    pub py_total_expenses_amt: Option<i64>,

    /// Total expenses - current year
    #[field(xpath = "/IRS990/CYTotalExpensesAmt", line = "Part I Line 18", alias = "/IRS990/TotalExpensesCurrentYear")]
    pub cy_total_expenses_amt: Option<i64>,

    /// Revenue less expenses - prior year
    #[field(xpath = "/IRS990/PYRevenuesLessExpensesAmt", line = "Part I Line 19", alias = "/IRS990/RevenuesLessExpensesPriorYear")]
    pub py_revenues_less_expenses_amt: Option<i64>,

    /// Revenue less expenses - current year
    #[field(xpath = "/IRS990/CYRevenuesLessExpensesAmt", line = "Part I Line 19", alias = "/IRS990/RevenuesLessExpensesCY")]
    pub cy_revenues_less_expenses_amt: Option<i64>,

    /// Total assets - beginning of year
    #[field(xpath = "/IRS990/TotalAssetsBOYAmt", line = "Part I Line 20", alias = "/IRS990/TotalAssetsBOY")]
    pub total_assets_boy_amt: Option<i64>,

    /// Total assets - end of year
    #[field(xpath = "/IRS990/TotalAssetsEOYAmt", line = "Part I Line 20", alias = "/IRS990/TotalAssetsEOY")]
    pub total_assets_eoy_amt: Option<i64>,

    /// Total liabilities - beginning of year
    #[field(xpath = "/IRS990/TotalLiabilitiesBOYAmt", line = "Part I Line 21", alias = "/IRS990/TotalLiabilitiesBOY")]
    pub total_liabilities_boy_amt: Option<i64>,

    /// Total liabilities - end of year
    #[field(xpath = "/IRS990/TotalLiabilitiesEOYAmt", line = "Part I Line 21", alias = "/IRS990/TotalLiabilitiesEOY")]
    pub total_liabilities_eoy_amt: Option<i64>,

    /// Net assets or fund balances - beginning of year
    #[field(xpath = "/IRS990/NetAssetsOrFundBalancesBOYAmt", line = "Part I Line 22", alias = "/IRS990/NetAssetsOrFundBalancesBOY")]
    pub net_assets_or_fund_balances_boy_amt: Option<i64>,

    /// Net assets or fund balances - end of year
    #[field(xpath = "/IRS990/NetAssetsOrFundBalancesEOYAmt", line = "Part I Line 22", alias = "/IRS990/NetAssetsOrFundBalancesEOY")]
    pub net_assets_or_fund_balances_eoy_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_part_ii", form = "Form990", part = "Part II", description = "Signature block")]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// May the IRS discuss this return with the preparer
    #[field(xpath = "/IRS990/DiscussWithPaidPreparerInd", line = "Part II", max_length = 5)]
    pub discuss_with_paid_preparer_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_part_iii",
    form = "Form990",
    part = "Part III",
    description = "Statement of program service accomplishments"
)]
pub struct PartIII {
    pub object_id: String,
    pub ein: String,

    /// Schedule O contains a response to a question in this part
    #[field(xpath = "/IRS990/InfoInScheduleOPartIIIInd", line = "Part III", max_length = 5)]
    pub info_in_schedule_o_part_iii_ind: Option<String>,

    /// Briefly describe the organization's mission
    #[field(xpath = "/IRS990/MissionDesc", line = "Part III Line 1", long, alias = "/IRS990/MissionDescription")]
    pub mission_desc: Option<String>,

    /// Significant program services not listed on the prior return
    #[field(xpath = "/IRS990/SignificantNewProgramSrvcInd", line = "Part III Line 2", max_length = 5)]
    pub significant_new_program_srvc_ind: Option<String>,

    /// Significant changes in how program services are conducted
    #[field(xpath = "/IRS990/SignificantChangeInd", line = "Part III Line 3", max_length = 5)]
    pub significant_change_ind: Option<String>,

    /// Activity code of the largest program service
    #[field(xpath = "/IRS990/ActivityCd", line = "Part III Line 4a", max_length = 3)]
    pub activity_cd: Option<String>,

    /// Expenses of the largest program service
    #[field(xpath = "/IRS990/ExpenseAmt", line = "Part III Line 4a")]
    pub expense_amt: Option<i64>,

    /// Grants of the largest program service
    #[field(xpath = "/IRS990/GrantAmt", line = "Part III Line 4a")]
    pub grant_amt: Option<i64>,

    /// Revenue of the largest program service
    #[field(xpath = "/IRS990/RevenueAmt", line = "Part III Line 4a")]
    pub revenue_amt: Option<i64>,

    /// Description of the largest program service
    #[field(xpath = "/IRS990/Desc", line = "Part III Line 4a", long, alias = "/IRS990/Description")]
    pub desc: Option<String>,

    /// Expenses of the second program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy2Grp/ExpenseAmt", line = "Part III Line 4b")]
    pub activity2_expense_amt: Option<i64>,

    /// Grants of the second program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy2Grp/GrantAmt", line = "Part III Line 4b")]
    pub activity2_grant_amt: Option<i64>,

    /// Revenue of the second program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy2Grp/RevenueAmt", line = "Part III Line 4b")]
    pub activity2_revenue_amt: Option<i64>,

    /// Description of the second program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy2Grp/Desc", line = "Part III Line 4b", long)]
    pub activity2_desc: Option<String>,

    /// Expenses of the third program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy3Grp/ExpenseAmt", line = "Part III Line 4c")]
    pub activity3_expense_amt: Option<i64>,

    /// Grants of the third program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy3Grp/GrantAmt", line = "Part III Line 4c")]
    pub activity3_grant_amt: Option<i64>,

    /// Revenue of the third program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy3Grp/RevenueAmt", line = "Part III Line 4c")]
    pub activity3_revenue_amt: Option<i64>,

    /// Description of the third program service
    #[field(xpath = "/IRS990/ProgSrvcAccomActy3Grp/Desc", line = "Part III Line 4c", long)]
    pub activity3_desc: Option<String>,

    /// Total program service expenses
    #[field(xpath = "/IRS990/TotalProgramServiceExpensesAmt", line = "Part III Line 4e", alias = "/IRS990/TotalProgramServiceExpense")]
    pub total_program_service_expenses_amt: Option<i64>,

    /// Other program services: expenses
    #[field(xpath = "/IRS990/TotalOtherProgSrvcExpenseAmt", line = "Part III Line 4d")]
    pub total_other_prog_srvc_expense_amt: Option<i64>,

    /// Other program services: grants
    #[field(xpath = "/IRS990/TotalOtherProgSrvcGrantAmt", line = "Part III Line 4d")]
    pub total_other_prog_srvc_grant_amt: Option<i64>,

    /// Other program services: revenue
    #[field(xpath = "/IRS990/TotalOtherProgSrvcRevenueAmt", line = "Part III Line 4d")]
    pub total_other_prog_srvc_revenue_amt: Option<i64>,

    /// Program service accomplishment 2: activity code
    #[field(xpath = "/IRS990/ProgSrvcAccomActy2Grp/ActivityCd", line = "Part III Line 4b", max_length = 3)]
    pub activity2_activity_cd: Option<String>,

    /// Program service accomplishment 3: activity code
    #[field(xpath = "/IRS990/ProgSrvcAccomActy3Grp/ActivityCd", line = "Part III Line 4c", max_length = 3)]
    pub activity3_activity_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_prgsrvcaccmactyothr",
    form = "Form990",
    part = "Part III",
    description = "Other program services",
    group = "/IRS990/ProgSrvcAccomActyOtherGrp",
    parent = "return_part_iii"
)]
pub struct ProgSrvcAccomActyOther {
    pub object_id: String,
    pub ein: String,

    /// Activity code
    #[field(xpath = "/IRS990/ProgSrvcAccomActyOtherGrp/ActivityCd", line = "Part III Line 4d", max_length = 3)]
    pub activity_cd: Option<String>,

    /// Expenses
    #[field(xpath = "/IRS990/ProgSrvcAccomActyOtherGrp/ExpenseAmt", line = "Part III Line 4d")]
    pub expense_amt: Option<i64>,

    /// Grants
    #[field(xpath = "/IRS990/ProgSrvcAccomActyOtherGrp/GrantAmt", line = "Part III Line 4d")]
    pub grant_amt: Option<i64>,

    /// Revenue
    #[field(xpath = "/IRS990/ProgSrvcAccomActyOtherGrp/RevenueAmt", line = "Part III Line 4d")]
    pub revenue_amt: Option<i64>,

    /// Description
    #[field(xpath = "/IRS990/ProgSrvcAccomActyOtherGrp/Desc", line = "Part III Line 4d", long)]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_part_iv",
    form = "Form990",
    part = "Part IV",
    description = "Checklist of required schedules"
)]
pub struct PartIV {
    pub object_id: String,
    pub ein: String,

    /// Described in section 501(c)(3) or 4947(a)(1)
    #[field(xpath = "/IRS990/DescribedInSection501c3Ind", line = "Part IV Line 1", max_length = 5)]
    pub described_in_section_501c3_ind: Option<String>,

    /// Schedule B required
    #[field(xpath = "/IRS990/ScheduleBRequiredInd", line = "Part IV Line 2", max_length = 5)]
    pub schedule_b_required_ind: Option<String>,

    /// Political campaign activities
    #[field(xpath = "/IRS990/PoliticalCampaignActyInd", line = "Part IV Line 3", max_length = 5)]
    pub political_campaign_acty_ind: Option<String>,

    /// Lobbying activities
    #[field(xpath = "/IRS990/LobbyingActivitiesInd", line = "Part IV Line 4", max_length = 5)]
    pub lobbying_activities_ind: Option<String>,

    /// Subject to proxy tax
    #[field(xpath = "/IRS990/SubjectToProxyTaxInd", line = "Part IV Line 5", max_length = 5)]
    pub subject_to_proxy_tax_ind: Option<String>,

    /// Maintains donor advised funds
    #[field(xpath = "/IRS990/DonorAdvisedFundInd", line = "Part IV Line 6", max_length = 5)]
    pub donor_advised_fund_ind: Option<String>,

    /// Conservation easements
    #[field(xpath = "/IRS990/ConservationEasementsInd", line = "Part IV Line 7", max_length = 5)]
    pub conservation_easements_ind: Option<String>,

    /// Collections of art or historical treasures
    #[field(xpath = "/IRS990/CollectionsOfArtInd", line = "Part IV Line 8", max_length = 5)]
    pub collections_of_art_ind: Option<String>,

    /// Credit counseling or debt management
    #[field(xpath = "/IRS990/CreditCounselingInd", line = "Part IV Line 9", max_length = 5)]
    pub credit_counseling_ind: Option<String>,

    /// Donor restricted or quasi endowments
    #[field(xpath = "/IRS990/DonorRstrOrQuasiEndowmentsInd", line = "Part IV Line 10", max_length = 5)]
    pub donor_rstr_or_quasi_endowments_ind: Option<String>,

    /// Land, buildings and equipment reported
    #[field(xpath = "/IRS990/ReportLandBuildingEquipmentInd", line = "Part IV Line 11a", max_length = 5)]
    pub report_land_building_equipment_ind: Option<String>,

    /// Investments in other securities reported
    #[field(xpath = "/IRS990/ReportInvestmentsOtherSecInd", line = "Part IV Line 11b", max_length = 5)]
    pub report_investments_other_sec_ind: Option<String>,

    /// Program related investments reported
    #[field(xpath = "/IRS990/ReportProgramRelatedInvstInd", line = "Part IV Line 11c", max_length = 5)]
    pub report_program_related_invst_ind: Option<String>,

    /// Other assets reported
    #[field(xpath = "/IRS990/ReportOtherAssetsInd", line = "Part IV Line 11d", max_length = 5)]
    pub report_other_assets_ind: Option<String>,

    /// Other liabilities reported
    #[field(xpath = "/IRS990/ReportOtherLiabilitiesInd", line = "Part IV Line 11e", max_length = 5)]
    pub report_other_liabilities_ind: Option<String>,

    /// Audited financial statements
    #[field(xpath = "/IRS990/IndependentAuditFinclStmtInd", line = "Part IV Line 12a", max_length = 5)]
    pub independent_audit_fincl_stmt_ind: Option<String>,

    /// School described in 170(b)(1)(A)(ii)
    #[field(xpath = "/IRS990/SchoolOperatingInd", line = "Part IV Line 13", max_length = 5)]
    pub school_operating_ind: Option<String>,

    /// Office, employees or agents outside the US
    #[field(xpath = "/IRS990/ForeignOfficeInd", line = "Part IV Line 14a", max_length = 5)]
    pub foreign_office_ind: Option<String>,

    /// Foreign activities over $10,000
    #[field(xpath = "/IRS990/ForeignActivitiesInd", line = "Part IV Line 14b", max_length = 5)]
    pub foreign_activities_ind: Option<String>,

    /// Professional fundraising services over $15,000
    #[field(xpath = "/IRS990/ProfessionalFundraisingInd", line = "Part IV Line 17", max_length = 5)]
    pub professional_fundraising_ind: Option<String>,

    /// Fundraising event income over $15,000
    #[field(xpath = "/IRS990/FundraisingActivitiesInd", line = "Part IV Line 18", max_length = 5)]
    pub fundraising_activities_ind: Option<String>,

    /// Gaming income over $15,000
    #[field(xpath = "/IRS990/GamingActivitiesInd", line = "Part IV Line 19", max_length = 5)]
    pub gaming_activities_ind: Option<String>,

    /// Operates one or more hospital facilities
    #[field(xpath = "/IRS990/OperateHospitalInd", line = "Part IV Line 20a", max_length = 5)]
    pub operate_hospital_ind: Option<String>,

    /// Grants over $5,000 to domestic organizations
    #[field(xpath = "/IRS990/GrantsToOrganizationsInd", line = "Part IV Line 21", max_length = 5)]
    pub grants_to_organizations_ind: Option<String>,

    /// Grants over $5,000 to domestic individuals
    #[field(xpath = "/IRS990/GrantsToIndividualsInd", line = "Part IV Line 22", max_length = 5)]
    pub grants_to_individuals_ind: Option<String>,

    /// Schedule J required
    #[field(xpath = "/IRS990/ScheduleJRequiredInd", line = "Part IV Line 23", max_length = 5)]
    pub schedule_j_required_ind: Option<String>,

    /// Tax-exempt bonds over $100,000
    #[field(xpath = "/IRS990/TaxExemptBondsInd", line = "Part IV Line 24a", max_length = 5)]
    pub tax_exempt_bonds_ind: Option<String>,

    /// Loans to or from interested persons outstanding
    #[field(xpath = "/IRS990/LoanOutstandingInd", line = "Part IV Line 26", max_length = 5)]
    pub loan_outstanding_ind: Option<String>,

    /// Noncash contributions over $25,000
    #[field(xpath = "/IRS990/NoncashContributionsInd", line = "Part IV Line 29", max_length = 5)]
    pub noncash_contributions_ind: Option<String>,

    /// Liquidated, terminated or dissolved
    #[field(xpath = "/IRS990/TerminateOperationsInd", line = "Part IV Line 31", max_length = 5)]
    pub terminate_operations_ind: Option<String>,

    /// Related entities
    #[field(xpath = "/IRS990/RelatedEntityInd", line = "Part IV Line 33", max_length = 5)]
    pub related_entity_ind: Option<String>,

    /// Related organizations
    #[field(xpath = "/IRS990/RelatedOrganizationCtrlEntInd", line = "Part IV Line 34", max_length = 5)]
    pub related_organization_ctrl_ent_ind: Option<String>,

    /// Financial statement footnote addresses FIN 48 liability
    #[field(xpath = "/IRS990/IncludeFIN48FootnoteInd", line = "Part IV Line 11f", max_length = 5)]
    pub include_fin_48_footnote_ind: Option<String>,

    /// Included in consolidated audited financial statements
    #[field(xpath = "/IRS990/ConsolidatedAuditFinclStmtInd", line = "Part IV Line 12b", max_length = 5)]
    pub consolidated_audit_fincl_stmt_ind: Option<String>,

    /// More than $5,000 of grants to foreign organizations
    #[field(xpath = "/IRS990/MoreThan5000KToOrgInd", line = "Part IV Line 15", max_length = 5)]
    pub more_than_5000_k_to_org_ind: Option<String>,

    /// More than $5,000 of aggregate grants to foreign individuals
    #[field(xpath = "/IRS990/MoreThan5000KToIndividualsInd", line = "Part IV Line 16", max_length = 5)]
    pub more_than_5000_k_to_individuals_ind: Option<String>,

    /// Audited financial statements of the hospital attached
    #[field(xpath = "/IRS990/AuditedFinancialStmtAttInd", line = "Part IV Line 20b", max_length = 5)]
    pub audited_financial_stmt_att_ind: Option<String>,

    /// Invested proceeds of tax-exempt bonds beyond a temporary period
    #[field(xpath = "/IRS990/InvestTaxExemptBondsInd", line = "Part IV Line 24b", max_length = 5)]
    pub invest_tax_exempt_bonds_ind: Option<String>,

    /// Maintained an escrow account to defease tax-exempt bonds
    #[field(xpath = "/IRS990/EscrowAccountInd", line = "Part IV Line 24c", max_length = 5)]
    pub escrow_account_ind: Option<String>,

    /// Acted as an on-behalf-of issuer for bonds
    #[field(xpath = "/IRS990/OnBehalfOfIssuerInd", line = "Part IV Line 24d", max_length = 5)]
    pub on_behalf_of_issuer_ind: Option<String>,

    /// Engaged in an excess benefit transaction
    #[field(xpath = "/IRS990/EngagedInExcessBenefitTransInd", line = "Part IV Line 25a", max_length = 5)]
    pub engaged_in_excess_benefit_trans_ind: Option<String>,

    /// Prior year excess benefit transaction not reported
    #[field(xpath = "/IRS990/PYExcessBenefitTransInd", line = "Part IV Line 25b", max_length = 5)]
    pub py_excess_benefit_trans_ind: Option<String>,

    /// Grant or assistance to an interested person
    #[field(xpath = "/IRS990/GrantToRelatedPersonInd", line = "Part IV Line 27", max_length = 5)]
    pub grant_to_related_person_ind: Option<String>,

    /// Business transaction with a current or former officer, director or key employee
    #[field(xpath = "/IRS990/BusinessRlnWithOrgMemInd", line = "Part IV Line 28a", max_length = 5)]
    pub business_rln_with_org_mem_ind: Option<String>,

    /// Business transaction with a family member of an officer, director or key employee
    #[field(xpath = "/IRS990/BusinessRlnWithFamMemInd", line = "Part IV Line 28b", max_length = 5)]
    pub business_rln_with_fam_mem_ind: Option<String>,

    /// Business transaction with an entity 35% owned by officers, directors or key employees
    #[field(xpath = "/IRS990/BusinessRlnWith35CtrlEntInd", line = "Part IV Line 28c", max_length = 5)]
    pub business_rln_with_35_ctrl_ent_ind: Option<String>,

    /// Received more than $25,000 in non-cash contributions
    #[field(xpath = "/IRS990/DeductibleNonCashContriInd", line = "Part IV Line 29", max_length = 5)]
    pub deductible_non_cash_contri_ind: Option<String>,

    /// Received contributions of art, historical treasures or conservation easements
    #[field(xpath = "/IRS990/DeductibleArtContributionInd", line = "Part IV Line 30", max_length = 5)]
    pub deductible_art_contribution_ind: Option<String>,

    /// Sold, exchanged or disposed of more than 25% of net assets
    #[field(xpath = "/IRS990/PartialLiquidationInd", line = "Part IV Line 32", max_length = 5)]
    pub partial_liquidation_ind: Option<String>,

    /// Owns 100% of a disregarded entity
    #[field(xpath = "/IRS990/DisregardedEntityInd", line = "Part IV Line 33", max_length = 5)]
    pub disregarded_entity_ind: Option<String>,

    /// Receipt or transfer with a controlled entity
    #[field(xpath = "/IRS990/TransactionWithControlEntInd", line = "Part IV Line 35b", max_length = 5)]
    pub transaction_with_control_ent_ind: Option<String>,

    /// Transfers to an exempt non-charitable related organization
    #[field(xpath = "/IRS990/TrnsfrExmptNonChrtblRltdOrgInd", line = "Part IV Line 36", max_length = 5)]
    pub trnsfr_exmpt_non_chrtbl_rltd_org_ind: Option<String>,

    /// Activities through an unrelated entity treated as a partnership
    #[field(xpath = "/IRS990/ActivitiesConductedPrtshpInd", line = "Part IV Line 37", max_length = 5)]
    pub activities_conducted_prtshp_ind: Option<String>,

    /// Schedule O completed
    #[field(xpath = "/IRS990/ScheduleORequiredInd", line = "Part IV Line 38", max_length = 5)]
    pub schedule_o_required_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_part_v",
    form = "Form990",
    part = "Part V",
    description = "Statements regarding other IRS filings and tax compliance"
)]
pub struct PartV {
    pub object_id: String,
    pub ein: String,

    /// Number of Forms 1096
    #[field(xpath = "/IRS990/IRPDocumentCnt", line = "Part V Line 1a")]
    pub irp_document_cnt: Option<i32>,

    /// Number of Forms W-2G
    #[field(xpath = "/IRS990/IRPDocumentW2GCnt", line = "Part V Line 1b")]
    pub irp_document_w2g_cnt: Option<i32>,

    /// Complied with backup withholding rules
    #[field(xpath = "/IRS990/BackupWthldComplianceInd", line = "Part V Line 1c", max_length = 5)]
    pub backup_wthld_compliance_ind: Option<String>,

    /// Number of employees reported on Form W-3
    #[field(xpath = "/IRS990/EmployeeCnt", line = "Part V Line 2a")]
    pub employee_cnt: Option<i32>,

    /// Filed all required employment tax returns
    #[field(xpath = "/IRS990/EmploymentTaxReturnsFiledInd", line = "Part V Line 2b", max_length = 5)]
    pub employment_tax_returns_filed_ind: Option<String>,

    /// Unrelated business gross income of $1,000 or more
    #[field(xpath = "/IRS990/UnrelatedBusIncmOverLimitInd", line = "Part V Line 3a", max_length = 5)]
    pub unrelated_bus_incm_over_limit_ind: Option<String>,

    /// Filed Form 990-T
    #[field(xpath = "/IRS990/Form990TFiledInd", line = "Part V Line 3b", max_length = 5)]
    pub form_990t_filed_ind: Option<String>,

    /// Interest in a foreign financial account
    #[field(xpath = "/IRS990/ForeignFinancialAccountInd", line = "Part V Line 4a", max_length = 5)]
    pub foreign_financial_account_ind: Option<String>,

    /// Foreign country of the account
    #[field(xpath = "/IRS990/ForeignCountryCd", line = "Part V Line 4b", max_length = 2)]
    pub foreign_country_cd: Option<String>,

    /// Party to a prohibited tax shelter transaction
    #[field(xpath = "/IRS990/ProhibitedTaxShelterTransInd", line = "Part V Line 5a", max_length = 5)]
    pub prohibited_tax_shelter_trans_ind: Option<String>,

    /// Taxable party notification
    #[field(xpath = "/IRS990/TaxablePartyNotificationInd", line = "Part V Line 5b", max_length = 5)]
    pub taxable_party_notification_ind: Option<String>,

    /// Solicited nondeductible contributions
    #[field(xpath = "/IRS990/NondeductibleContributionsInd", line = "Part V Line 6a", max_length = 5)]
    pub nondeductible_contributions_ind: Option<String>,

    /// Received quid pro quo contributions over $75
    #[field(xpath = "/IRS990/QuidProQuoContributionsInd", line = "Part V Line 7a", max_length = 5)]
    pub quid_pro_quo_contributions_ind: Option<String>,

    /// Number of Forms 8282 filed
    #[field(xpath = "/IRS990/Form8282FiledCnt", line = "Part V Line 7d")]
    pub form_8282_filed_cnt: Option<i32>,

    /// Initiation fees and capital contributions
    #[field(xpath = "/IRS990/InitiationFeesAndCapContriAmt", line = "Part V Line 10a")]
    pub initiation_fees_and_cap_contri_amt: Option<i64>,

    /// Gross receipts for public use of club facilities
    #[field(xpath = "/IRS990/GrossReceiptsForPublicUseAmt", line = "Part V Line 10b")]
    pub gross_receipts_for_public_use_amt: Option<i64>,

    /// Filing Form 990 in lieu of Form 1041
    #[field(xpath = "/IRS990/Filed1041Ind", line = "Part V Line 11a", max_length = 5)]
    pub filed_1041_ind: Option<String>,

    /// Tax-exempt interest received or accrued
    #[field(xpath = "/IRS990/TaxExemptInterestAmt", line = "Part V Line 11b")]
    pub tax_exempt_interest_amt: Option<i64>,

    /// Filed Form 8886-T
    #[field(xpath = "/IRS990/Form8886TFiledInd", line = "Part V Line 5c", max_length = 5)]
    pub form_8886_t_filed_ind: Option<String>,

    /// Solicitations stated contributions were not deductible
    #[field(xpath = "/IRS990/NondeductibleContriDisclInd", line = "Part V Line 6b", max_length = 5)]
    pub nondeductible_contri_discl_ind: Option<String>,

    /// Notified donors of the value of goods or services provided
    #[field(xpath = "/IRS990/QuidProQuoContriDisclInd", line = "Part V Line 7b", max_length = 5)]
    pub quid_pro_quo_contri_discl_ind: Option<String>,

    /// Sold or disposed of property for which Form 8282 was required
    #[field(xpath = "/IRS990/Form8282PropertyDisposedOfInd", line = "Part V Line 7c", max_length = 5)]
    pub form_8282_property_disposed_of_ind: Option<String>,

    /// Received funds to pay premiums on a personal benefit contract
    #[field(xpath = "/IRS990/RcvFndsToPayPrsnlBnftCntrctInd", line = "Part V Line 7e", max_length = 5)]
    pub rcv_fnds_to_pay_prsnl_bnft_cntrct_ind: Option<String>,

    /// Paid premiums on a personal benefit contract
    #[field(xpath = "/IRS990/PayPremiumsPrsnlBnftCntrctInd", line = "Part V Line 7f", max_length = 5)]
    pub pay_premiums_prsnl_bnft_cntrct_ind: Option<String>,

    /// Filed Form 8899 for qualified intellectual property
    #[field(xpath = "/IRS990/Form8899Filedind", line = "Part V Line 7g")]
    pub form_8899_filedind: Option<String>,

    /// Filed Form 1098-C for contributed vehicles
    #[field(xpath = "/IRS990/Form1098CFiledInd", line = "Part V Line 7h", max_length = 5)]
    pub form_1098_c_filed_ind: Option<String>,

    /// Donor advised fund with excess business holdings
    #[field(xpath = "/IRS990/DAFExcessBusinessHoldingsInd", line = "Part V Line 8", max_length = 5)]
    pub daf_excess_business_holdings_ind: Option<String>,

    /// Made a taxable distribution under section 4966
    #[field(xpath = "/IRS990/TaxableDistributionsInd", line = "Part V Line 9a", max_length = 5)]
    pub taxable_distributions_ind: Option<String>,

    /// Made a distribution to a donor, donor advisor or related person
    #[field(xpath = "/IRS990/DistributionToDonorInd", line = "Part V Line 9b", max_length = 5)]
    pub distribution_to_donor_ind: Option<String>,

    /// Gross income from members or shareholders
    #[field(xpath = "/IRS990/GrossIncomeFromMembersAmt", line = "Part V Line 11a")]
    pub gross_income_from_members_amt: Option<i64>,

    /// Gross income from other sources
    #[field(xpath = "/IRS990/GrossIncomeFromOtherSourcesAmt", line = "Part V Line 11b")]
    pub gross_income_from_other_sources_amt: Option<i64>,

    /// Reserves required by the states where licensed
    #[field(xpath = "/IRS990/RequiredReservesAmt", line = "Part V Line 13b")]
    pub required_reserves_amt: Option<i64>,

    /// Reserves on hand
    #[field(xpath = "/IRS990/ReservesMaintainedAmt", line = "Part V Line 13c")]
    pub reserves_maintained_amt: Option<i64>,

    /// Received payments for indoor tanning services
    #[field(xpath = "/IRS990/IndoorTanningServicesInd", line = "Part V Line 14a", max_length = 5)]
    pub indoor_tanning_services_ind: Option<String>,

    /// Schedule O explanation for Form 720 not filed
    #[field(xpath = "/IRS990/InfoInScheduleOPartVInd", line = "Part V Line 14b", max_length = 5)]
    pub info_in_schedule_o_part_v_ind: Option<String>,

    /// Subject to excise tax on excess compensation or parachute payments
    #[field(xpath = "/IRS990/SubjToTaxRmnrtnExPrchtPymtInd", line = "Part V Line 15", max_length = 5)]
    pub subj_to_tax_rmnrtn_ex_prcht_pymt_ind: Option<String>,

    /// Subject to excise tax on net investment income
    #[field(xpath = "/IRS990/SubjectToExcsTaxNetInvstIncInd", line = "Part V Line 16", max_length = 5)]
    pub subject_to_excs_tax_net_invst_inc_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_part_vi",
    form = "Form990",
    part = "Part VI",
    description = "Governance, management and disclosure"
)]
pub struct PartVI {
    pub object_id: String,
    pub ein: String,

    /// Number of voting members of the governing body
    #[field(xpath = "/IRS990/GoverningBodyVotingMembersCnt", line = "Part VI Line 1a")]
    pub governing_body_voting_members_cnt: Option<i32>,

    /// Number of independent voting members
    #[field(xpath = "/IRS990/IndependentVotingMemberCnt", line = "Part VI Line 1b")]
    pub independent_voting_member_cnt: Option<i32>,

    /// Family or business relationship among officers
    #[field(xpath = "/IRS990/FamilyOrBusinessRlnInd", line = "Part VI Line 2", max_length = 5)]
    pub family_or_business_rln_ind: Option<String>,

    /// Delegated management duties to a management company
    #[field(xpath = "/IRS990/DelegationOfMgmtDutiesInd", line = "Part VI Line 3", max_length = 5)]
    pub delegation_of_mgmt_duties_ind: Option<String>,

    /// Significant changes to governing documents
    #[field(xpath = "/IRS990/ChangeToOrgDocumentsInd", line = "Part VI Line 4", max_length = 5)]
    pub change_to_org_documents_ind: Option<String>,

    /// Significant diversion of assets
    #[field(xpath = "/IRS990/MaterialDiversionOrMisuseInd", line = "Part VI Line 5", max_length = 5)]
    pub material_diversion_or_misuse_ind: Option<String>,

    /// Members or stockholders
    #[field(xpath = "/IRS990/MembersOrStockholdersInd", line = "Part VI Line 6", max_length = 5)]
    pub members_or_stockholders_ind: Option<String>,

    /// Members may elect governing body members
    #[field(xpath = "/IRS990/ElectionOfBoardMembersInd", line = "Part VI Line 7a", max_length = 5)]
    pub election_of_board_members_ind: Option<String>,

    /// Minutes of governing body meetings
    #[field(xpath = "/IRS990/MinutesOfGoverningBodyInd", line = "Part VI Line 8a", max_length = 5)]
    pub minutes_of_governing_body_ind: Option<String>,

    /// Minutes of committee meetings
    #[field(xpath = "/IRS990/MinutesOfCommitteesInd", line = "Part VI Line 8b", max_length = 5)]
    pub minutes_of_committees_ind: Option<String>,

    /// Local chapters, branches or affiliates
    #[field(xpath = "/IRS990/LocalChaptersInd", line = "Part VI Line 10a", max_length = 5)]
    pub local_chapters_ind: Option<String>,

    /// Copy of Form 990 provided to the governing body
    #[field(xpath = "/IRS990/Form990ProvidedToGoverningBodyInd", line = "Part VI Line 11a", max_length = 5)]
    pub form990_provided_to_governing_body_ind: Option<String>,

    /// Written conflict of interest policy
    #[field(xpath = "/IRS990/ConflictOfInterestPolicyInd", line = "Part VI Line 12a", max_length = 5)]
    pub conflict_of_interest_policy_ind: Option<String>,

    /// Officers required to disclose interests annually
    #[field(xpath = "/IRS990/AnnualDisclosureCoveredPrsnInd", line = "Part VI Line 12b", max_length = 5)]
    pub annual_disclosure_covered_prsn_ind: Option<String>,

    /// Policy monitored and enforced
    #[field(xpath = "/IRS990/RegularMonitoringEnfrcInd", line = "Part VI Line 12c", max_length = 5)]
    pub regular_monitoring_enfrc_ind: Option<String>,

    /// Written whistleblower policy
    #[field(xpath = "/IRS990/WhistleblowerPolicyInd", line = "Part VI Line 13", max_length = 5)]
    pub whistleblower_policy_ind: Option<String>,

    /// Written document retention and destruction policy
    #[field(xpath = "/IRS990/DocumentRetentionPolicyInd", line = "Part VI Line 14", max_length = 5)]
    pub document_retention_policy_ind: Option<String>,

    /// Compensation review process for the top official
    #[field(xpath = "/IRS990/CompensationProcessCEOInd", line = "Part VI Line 15a", max_length = 5)]
    pub compensation_process_ceo_ind: Option<String>,

    /// Compensation review process for other officers
    #[field(xpath = "/IRS990/CompensationProcessOtherInd", line = "Part VI Line 15b", max_length = 5)]
    pub compensation_process_other_ind: Option<String>,

    /// Invested in a joint venture with a taxable entity
    #[field(xpath = "/IRS990/InvestmentInJointVentureInd", line = "Part VI Line 16a", max_length = 5)]
    pub investment_in_joint_venture_ind: Option<String>,

    /// Documents made available on own website
    #[field(xpath = "/IRS990/OwnWebsiteInd", line = "Part VI Line 18", max_length = 5)]
    pub own_website_ind: Option<String>,

    /// Documents made available on another's website
    #[field(xpath = "/IRS990/OtherWebsiteInd", line = "Part VI Line 18", max_length = 5)]
    pub other_website_ind: Option<String>,

    /// Documents made available upon request
    #[field(xpath = "/IRS990/UponRequestInd", line = "Part VI Line 18", max_length = 5)]
    pub upon_request_ind: Option<String>,

    /// Person who possesses the books and records
    #[field(xpath = "/IRS990/BooksInCareOfDetail/PersonNm", line = "Part VI Line 20")]
    pub books_in_care_of_person_nm: Option<String>,

    /// Books in care of: business name
    #[field(xpath = "/IRS990/BooksInCareOfDetail/BusinessName/BusinessNameLine1Txt", line = "Part VI Line 20")]
    pub books_in_care_of_business_name_txt: Option<String>,

    /// Books in care of: phone
    #[field(xpath = "/IRS990/BooksInCareOfDetail/PhoneNum", line = "Part VI Line 20", max_length = 20)]
    pub books_in_care_of_phone_num: Option<String>,

    /// Books in care of: city
    #[field(xpath = "/IRS990/BooksInCareOfDetail/USAddress/CityNm", line = "Part VI Line 20", max_length = 22)]
    pub books_in_care_of_city_nm: Option<String>,

    /// Books in care of: state
    #[field(xpath = "/IRS990/BooksInCareOfDetail/USAddress/StateAbbreviationCd", line = "Part VI Line 20", max_length = 2)]
    pub books_in_care_of_state_cd: Option<String>,

    /// Decisions of the governing body subject to approval of members
    #[field(
        xpath = "/IRS990/DecisionsSubjectToApprovaInd",
        line = "Part VI Line 7b",
        max_length = 5
    )]
    pub decisions_subject_to_approva_ind: Option<String>,

    /// Officer, director or key employee without a mailing address at the organization
    #[field(xpath = "/IRS990/NoMemberAddressInd", line = "Part VI Line 9", max_length = 5)]
    pub no_member_address_ind: Option<String>,

    /// Written policies governing chapters and affiliates
    #[field(
        xpath = "/IRS990/PolicyReferenceChaptersInd",
        line = "Part VI Line 10b",
        max_length = 5
    )]
    pub policy_reference_chapters_ind: Option<String>,

    /// Written policy for participation in joint ventures
    #[field(
        xpath = "/IRS990/WrittenPolicyOrProcedureInd",
        line = "Part VI Line 16b",
        max_length = 5
    )]
    pub written_policy_or_procedure_ind: Option<String>,

    /// State with which a copy of the return is filed
    #[field(
        xpath = "/IRS990/StatesWhereCopyOfReturnIsFldCd",
        line = "Part VI Line 17",
        max_length = 2
    )]
    pub states_where_copy_of_return_is_fld_cd: Option<String>,

    /// Forms made available to the public another way
    #[field(xpath = "/IRS990/OtherInd", line = "Part VI Line 18", max_length = 5)]
    pub other_ind: Option<String>,

    /// Address of the person with the books
    #[field(
        xpath = "/IRS990/BooksInCareOfDetail/USAddress/AddressLine1Txt",
        line = "Part VI Line 20"
    )]
    pub books_in_care_of_address_line1_txt: Option<String>,

    /// ZIP code of the person with the books
    #[field(
        xpath = "/IRS990/BooksInCareOfDetail/USAddress/ZIPCd",
        line = "Part VI Line 20",
        max_length = 10
    )]
    pub books_in_care_of_zip_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_part_vii",
    form = "Form990",
    part = "Part VII",
    description = "Compensation of officers, directors, trustees, key employees, highest compensated employees and independent contractors"
)]
pub struct PartVII {
    pub object_id: String,
    pub ein: String,

    /// No listed persons compensated
    #[field(xpath = "/IRS990/NoListedPersonsCompensatedInd", line = "Part VII Section A", max_length = 5)]
    pub no_listed_persons_compensated_ind: Option<String>,

    /// Total reportable compensation from the organization
    #[field(xpath = "/IRS990/TotalReportableCompFromOrgAmt", line = "Part VII Line 1d")]
    pub total_reportable_comp_from_org_amt: Option<i64>,

    /// Total reportable compensation from related organizations
    #[field(xpath = "/IRS990/TotReportableCompRltdOrgAmt", line = "Part VII Line 1d")]
    pub tot_reportable_comp_rltd_org_amt: Option<i64>,

    /// Total estimated other compensation
    #[field(xpath = "/IRS990/TotalOtherCompensationAmt", line = "Part VII Line 1d")]
    pub total_other_compensation_amt: Option<i64>,

    /// Individuals receiving more than $100,000
    #[field(xpath = "/IRS990/IndivRcvdGreaterThan100KCnt", line = "Part VII Line 2")]
    pub indiv_rcvd_greater_than_100k_cnt: Option<i32>,

    /// Former officers listed
    #[field(xpath = "/IRS990/FormerOfcrEmployeesListedInd", line = "Part VII Line 3", max_length = 5)]
    pub former_ofcr_employees_listed_ind: Option<String>,

    /// Any listed person received over $150,000
    #[field(xpath = "/IRS990/TotalCompGreaterThan150KInd", line = "Part VII Line 4", max_length = 5)]
    pub total_comp_greater_than_150k_ind: Option<String>,

    /// Compensation from unrelated organizations
    #[field(xpath = "/IRS990/CompensationFromOtherSrcsInd", line = "Part VII Line 5", max_length = 5)]
    pub compensation_from_other_srcs_ind: Option<String>,

    /// Contractors receiving more than $100,000
    #[field(xpath = "/IRS990/CntrctRcvdGreaterThan100KCnt", line = "Part VII Section B Line 2")]
    pub cntrct_rcvd_greater_than_100k_cnt: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_frm990prtviisctna",
    form = "Form990",
    part = "Part VII Section A",
    description = "Officers, directors, trustees, key employees and highest compensated employees",
    group = "/IRS990/Form990PartVIISectionAGrp",
    parent = "return_part_vii"
)]
pub struct Form990PartVIISectionA {
    pub object_id: String,
    pub ein: String,

    /// Name of person
    #[field(xpath = "/IRS990/Form990PartVIISectionAGrp/PersonNm", line = "Part VII Section A Column A")]
    pub person_nm: Option<String>,

    /// Name of business
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part VII Section A Column A"
    )]
    pub business_name_line1_txt: Option<String>,

    /// Title
    #[field(xpath = "/IRS990/Form990PartVIISectionAGrp/TitleTxt", line = "Part VII Section A Column A")]
    pub title_txt: Option<String>,

    /// Average hours per week
    #[field(xpath = "/IRS990/Form990PartVIISectionAGrp/AverageHoursPerWeekRt", line = "Part VII Section A Column B")]
    pub average_hours_per_week_rt: Option<f64>,

    /// Average hours per week for related organizations
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/AverageHoursPerWeekRltdOrgRt",
        line = "Part VII Section A Column B"
    )]
    pub average_hours_per_week_rltd_org_rt: Option<f64>,

    /// Individual trustee or director
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/IndividualTrusteeOrDirectorInd",
        line = "Part VII Section A Column C",
        max_length = 5
    )]
    pub individual_trustee_or_director_ind: Option<String>,

    /// Institutional trustee
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/InstitutionalTrusteeInd",
        line = "Part VII Section A Column C",
        max_length = 5
    )]
    pub institutional_trustee_ind: Option<String>,

    /// Officer
    #[field(xpath = "/IRS990/Form990PartVIISectionAGrp/OfficerInd", line = "Part VII Section A Column C", max_length = 5)]
    pub officer_ind: Option<String>,

    /// Key employee
    #[field(xpath = "/IRS990/Form990PartVIISectionAGrp/KeyEmployeeInd", line = "Part VII Section A Column C", max_length = 5)]
    pub key_employee_ind: Option<String>,

    /// Highest compensated employee
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/HighestCompensatedEmployeeInd",
        line = "Part VII Section A Column C",
        max_length = 5
    )]
    pub highest_compensated_employee_ind: Option<String>,

    /// Former officer, director or trustee
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/FormerOfcrDirectorTrusteeInd",
        line = "Part VII Section A Column C",
        max_length = 5
    )]
    pub former_ofcr_director_trustee_ind: Option<String>,

    /// Reportable compensation from the organization
    #[field(xpath = "/IRS990/Form990PartVIISectionAGrp/ReportableCompFromOrgAmt", line = "Part VII Section A Column D")]
    pub reportable_comp_from_org_amt: Option<i64>,

    /// Reportable compensation from related organizations
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/ReportableCompFromRltdOrgAmt",
        line = "Part VII Section A Column E"
    )]
    pub reportable_comp_from_rltd_org_amt: Option<i64>,

    /// Estimated amount of other compensation
    #[field(xpath = "/IRS990/Form990PartVIISectionAGrp/OtherCompensationAmt", line = "Part VII Section A Column F")]
    pub other_compensation_amt: Option<i64>,

    /// Name of business, second line
    #[field(
        xpath = "/IRS990/Form990PartVIISectionAGrp/BusinessName/BusinessNameLine2Txt",
        line = "Part VII Section A Column A"
    )]
    pub business_name_line_2_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_cntrctrcmpnstn",
    form = "Form990",
    part = "Part VII Section B",
    description = "Five highest compensated independent contractors",
    group = "/IRS990/ContractorCompensationGrp",
    parent = "return_part_vii"
)]
pub struct ContractorCompensation {
    pub object_id: String,
    pub ein: String,

    /// Contractor name (person)
    #[field(xpath = "/IRS990/ContractorCompensationGrp/ContractorName/PersonNm", line = "Part VII Section B Line 1")]
    pub contractor_person_nm: Option<String>,

    /// Contractor name (business)
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorName/BusinessName/BusinessNameLine1Txt",
        line = "Part VII Section B Line 1"
    )]
    pub contractor_business_name_txt: Option<String>,

    /// Contractor street address
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorAddress/USAddress/AddressLine1Txt",
        line = "Part VII Section B Line 1",
        max_length = 35
    )]
    pub contractor_address_line1_txt: Option<String>,

    /// Contractor city
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorAddress/USAddress/CityNm",
        line = "Part VII Section B Line 1",
        max_length = 22
    )]
    pub contractor_city_nm: Option<String>,

    /// Contractor state
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorAddress/USAddress/StateAbbreviationCd",
        line = "Part VII Section B Line 1",
        max_length = 2
    )]
    pub contractor_state_cd: Option<String>,

    /// Contractor ZIP code
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorAddress/USAddress/ZIPCd",
        line = "Part VII Section B Line 1",
        max_length = 10
    )]
    pub contractor_zip_cd: Option<String>,

    /// Description of services
    #[field(xpath = "/IRS990/ContractorCompensationGrp/ServicesDesc", line = "Part VII Section B Line 1", long)]
    pub services_desc: Option<String>,

    /// Compensation
    #[field(xpath = "/IRS990/ContractorCompensationGrp/CompensationAmt", line = "Part VII Section B Line 1")]
    pub compensation_amt: Option<i64>,

    /// Name of contractor (business), second line
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorCompensationGrp/ContractorName/BusinessName/BusinessNameLine2Txt",
        line = "Part VII Section B Line 1 Column A"
    )]
    pub contractor_business_name_line2_txt: Option<String>,

    /// Foreign address of contractor
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorCompensationGrp/ContractorAddress/ForeignAddress/AddressLine1Txt",
        line = "Part VII Section B Line 1 Column A"
    )]
    pub contractor_foreign_address_line1_txt: Option<String>,

    /// Country of contractor
    #[field(
        xpath = "/IRS990/ContractorCompensationGrp/ContractorCompensationGrp/ContractorAddress/ForeignAddress/CountryCd",
        line = "Part VII Section B Line 1 Column A",
        max_length = 2
    )]
    pub contractor_country_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_part_viii", form = "Form990", part = "Part VIII", description = "Statement of revenue")]
pub struct PartVIII {
    pub object_id: String,
    pub ein: String,

    /// Federated campaigns
    #[field(xpath = "/IRS990/FederatedCampaignsAmt", line = "Part VIII Line 1a", alias = "/IRS990/FederatedCampaigns")]
    pub federated_campaigns_amt: Option<i64>,

    /// Membership dues
    #[field(xpath = "/IRS990/MembershipDuesAmt", line = "Part VIII Line 1b", alias = "/IRS990/MembershipDues")]
    pub membership_dues_amt: Option<i64>,

    /// Fundraising events
    #[field(xpath = "/IRS990/FundraisingAmt", line = "Part VIII Line 1c", alias = "/IRS990/FundraisingEvents")]
    pub fundraising_amt: Option<i64>,

    /// Related organizations
    #[field(xpath = "/IRS990/RelatedOrganizationsAmt", line = "Part VIII Line 1d", alias = "/IRS990/RelatedOrganizations")]
    pub related_organizations_amt: Option<i64>,

    /// Government grants (contributions)
    #[field(xpath = "/IRS990/GovernmentGrantsAmt", line = "Part VIII Line 1e", alias = "/IRS990/GovernmentGrants")]
    pub government_grants_amt: Option<i64>,

    /// All other contributions, gifts, grants
    #[field(xpath = "/IRS990/AllOtherContributionsAmt", line = "Part VIII Line 1f", alias = "/IRS990/AllOtherContributions")]
    pub all_other_contributions_amt: Option<i64>,

    /// Noncash contributions included in lines 1a-1f
    #[field(xpath = "/IRS990/NoncashContributionsAmt", line = "Part VIII Line 1g", alias = "/IRS990/NoncashContributions")]
    pub noncash_contributions_amt: Option<i64>,

    /// Total contributions
    #[field(xpath = "/IRS990/TotalContributionsAmt", line = "Part VIII Line 1h", alias = "/IRS990/TotalContributions")]
    pub total_contributions_amt: Option<i64>,

    /// Total program service revenue
    #[field(xpath = "/IRS990/TotalProgramServiceRevenueAmt", line = "Part VIII Line 2g", alias = "/IRS990/TotalProgramServiceRevenue")]
    pub total_program_service_revenue_amt: Option<i64>,

    /// Investment income - total
    #[field(xpath = "/IRS990/InvestmentIncomeGrp/TotalRevenueColumnAmt", line = "Part VIII Line 3 Column A")]
    pub investment_income_total_amt: Option<i64>,

    /// Investment income - related or exempt function revenue
    #[field(xpath = "/IRS990/InvestmentIncomeGrp/RelatedOrExemptFuncIncomeAmt", line = "Part VIII Line 3 Column B")]
    pub investment_income_related_amt: Option<i64>,

    /// Investment income - unrelated business revenue
    #[field(xpath = "/IRS990/InvestmentIncomeGrp/UnrelatedBusinessRevenueAmt", line = "Part VIII Line 3 Column C")]
    pub investment_income_unrelated_amt: Option<i64>,

    /// Investment income - revenue excluded from tax
    #[field(xpath = "/IRS990/InvestmentIncomeGrp/ExclusionAmt", line = "Part VIII Line 3 Column D")]
    pub investment_income_exclusion_amt: Option<i64>,

    /// Income from investment of tax-exempt bond proceeds
    #[field(xpath = "/IRS990/IncmFromInvestBondProceedsGrp/TotalRevenueColumnAmt", line = "Part VIII Line 4 Column A")]
    pub bond_proceeds_income_total_amt: Option<i64>,

    /// Royalties - total
    #[field(xpath = "/IRS990/RoyaltiesRevenueGrp/TotalRevenueColumnAmt", line = "Part VIII Line 5 Column A")]
    pub royalties_total_amt: Option<i64>,

    /// Gross rents - real
    #[field(xpath = "/IRS990/GrossRentsGrp/RealAmt", line = "Part VIII Line 6a")]
    pub gross_rents_real_amt: Option<i64>,

    /// Gross rents - personal
    #[field(xpath = "/IRS990/GrossRentsGrp/PersonalAmt", line = "Part VIII Line 6a")]
    pub gross_rents_personal_amt: Option<i64>,

    /// Net rental income or loss
    #[field(xpath = "/IRS990/NetRentalIncomeOrLossGrp/TotalRevenueColumnAmt", line = "Part VIII Line 6d Column A")]
    pub net_rental_income_total_amt: Option<i64>,

    /// Gross amount from sales of assets - securities
    #[field(xpath = "/IRS990/GrossAmountSalesAssetsGrp/SecuritiesAmt", line = "Part VIII Line 7a")]
    pub gross_sales_securities_amt: Option<i64>,

    /// Gross amount from sales of assets - other
    #[field(xpath = "/IRS990/GrossAmountSalesAssetsGrp/OtherAmt", line = "Part VIII Line 7a")]
    pub gross_sales_other_amt: Option<i64>,

    /// Net gain or loss from sales of assets
    #[field(xpath = "/IRS990/NetGainOrLossInvestmentsGrp/TotalRevenueColumnAmt", line = "Part VIII Line 7d Column A")]
    pub net_gain_or_loss_total_amt: Option<i64>,

    /// Gross income from fundraising events
    #[field(xpath = "/IRS990/FundraisingGrossIncomeAmt", line = "Part VIII Line 8a")]
    pub fundraising_gross_income_amt: Option<i64>,

    /// Contributions reported on line 1c
    #[field(xpath = "/IRS990/ContriRptFundraisingEventAmt", line = "Part VIII Line 8a")]
    pub contri_rpt_fundraising_event_amt: Option<i64>,

    /// Direct expenses of fundraising events
    #[field(xpath = "/IRS990/FundraisingDirectExpensesAmt", line = "Part VIII Line 8b")]
    pub fundraising_direct_expenses_amt: Option<i64>,

    /// Net income from fundraising events
    #[field(xpath = "/IRS990/NetIncmFromFundraisingEvtGrp/TotalRevenueColumnAmt", line = "Part VIII Line 8c Column A")]
    pub net_fundraising_total_amt: Option<i64>,

    /// Gross income from gaming activities
    #[field(xpath = "/IRS990/GamingGrossIncomeAmt", line = "Part VIII Line 9a")]
    pub gaming_gross_income_amt: Option<i64>,

    /// Net income from gaming activities
    #[field(xpath = "/IRS990/NetIncomeFromGamingGrp/TotalRevenueColumnAmt", line = "Part VIII Line 9c Column A")]
    pub net_gaming_total_amt: Option<i64>,

    /// Gross sales of inventory
    #[field(xpath = "/IRS990/GrossSalesOfInventoryAmt", line = "Part VIII Line 10a")]
    pub gross_sales_of_inventory_amt: Option<i64>,

    /// Net income from sales of inventory
    #[field(xpath = "/IRS990/NetIncomeOrLossGrp/TotalRevenueColumnAmt", line = "Part VIII Line 10c Column A")]
    pub net_inventory_total_amt: Option<i64>,

    /// Miscellaneous revenue - total
    #[field(xpath = "/IRS990/MiscellaneousRevenueGrp/TotalRevenueColumnAmt", line = "Part VIII Line 11d Column A")]
    pub miscellaneous_revenue_total_amt: Option<i64>,

    /// Total revenue
    #[field(xpath = "/IRS990/TotalRevenueGrp/TotalRevenueColumnAmt", line = "Part VIII Line 12 Column A", alias = "/IRS990/TotalRevenue/TotalRevenueColumn")]
    pub total_revenue_amt: Option<i64>,

    /// Total related or exempt function revenue
    #[field(xpath = "/IRS990/TotalRevenueGrp/RelatedOrExemptFuncIncomeAmt", line = "Part VIII Line 12 Column B")]
    pub total_related_amt: Option<i64>,

    /// Total unrelated business revenue
    #[field(xpath = "/IRS990/TotalRevenueGrp/UnrelatedBusinessRevenueAmt", line = "Part VIII Line 12 Column C")]
    pub total_unrelated_amt: Option<i64>,

    /// Total revenue excluded from tax
    #[field(xpath = "/IRS990/TotalRevenueGrp/ExclusionAmt", line = "Part VIII Line 12 Column D")]
    pub total_exclusion_amt: Option<i64>,

    /// Income from investment of tax-exempt bond proceeds - related or exempt function revenue
    #[field(
        xpath = "/IRS990/IncmFromInvestBondProceedsGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 4 Column B"
    )]
    pub bond_proceeds_income_related_amt: Option<i64>,

    /// Income from investment of tax-exempt bond proceeds - unrelated business revenue
    #[field(
        xpath = "/IRS990/IncmFromInvestBondProceedsGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 4 Column C"
    )]
    pub bond_proceeds_income_unrelated_amt: Option<i64>,

    /// Income from investment of tax-exempt bond proceeds - revenue excluded from tax
    #[field(xpath = "/IRS990/IncmFromInvestBondProceedsGrp/ExclusionAmt", line = "Part VIII Line 4 Column D")]
    pub bond_proceeds_income_exclusion_amt: Option<i64>,

    /// Royalties - related or exempt function revenue
    #[field(
        xpath = "/IRS990/RoyaltiesRevenueGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 5 Column B"
    )]
    pub royalties_related_amt: Option<i64>,

    /// Royalties - unrelated business revenue
    #[field(
        xpath = "/IRS990/RoyaltiesRevenueGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 5 Column C"
    )]
    pub royalties_unrelated_amt: Option<i64>,

    /// Royalties - revenue excluded from tax
    #[field(xpath = "/IRS990/RoyaltiesRevenueGrp/ExclusionAmt", line = "Part VIII Line 5 Column D")]
    pub royalties_exclusion_amt: Option<i64>,

    /// Less rental expenses - real
    #[field(xpath = "/IRS990/LessRentalExpensesGrp/RealAmt", line = "Part VIII Line 6b")]
    pub rental_expenses_real_amt: Option<i64>,

    /// Less rental expenses - personal
    #[field(xpath = "/IRS990/LessRentalExpensesGrp/PersonalAmt", line = "Part VIII Line 6b")]
    pub rental_expenses_personal_amt: Option<i64>,

    /// Rental income or loss - real
    #[field(xpath = "/IRS990/RentalIncomeOrLossGrp/RealAmt", line = "Part VIII Line 6c")]
    pub rental_income_real_amt: Option<i64>,

    /// Rental income or loss - personal
    #[field(xpath = "/IRS990/RentalIncomeOrLossGrp/PersonalAmt", line = "Part VIII Line 6c")]
    pub rental_income_personal_amt: Option<i64>,

    /// Net rental income or loss - related or exempt function revenue
    #[field(
        xpath = "/IRS990/NetRentalIncomeOrLossGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 6d Column B"
    )]
    pub net_rental_income_related_amt: Option<i64>,

    /// Net rental income or loss - unrelated business revenue
    #[field(
        xpath = "/IRS990/NetRentalIncomeOrLossGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 6d Column C"
    )]
    pub net_rental_income_unrelated_amt: Option<i64>,

    /// Net rental income or loss - revenue excluded from tax
    #[field(xpath = "/IRS990/NetRentalIncomeOrLossGrp/ExclusionAmt", line = "Part VIII Line 6d Column D")]
    pub net_rental_income_exclusion_amt: Option<i64>,

    /// Less cost or other basis and sales expenses - securities
    #[field(xpath = "/IRS990/LessCostOthBasisSalesExpnssGrp/SecuritiesAmt", line = "Part VIII Line 7b")]
    pub cost_basis_securities_amt: Option<i64>,

    /// Less cost or other basis and sales expenses - other
    #[field(xpath = "/IRS990/LessCostOthBasisSalesExpnssGrp/OtherAmt", line = "Part VIII Line 7b")]
    pub cost_basis_other_amt: Option<i64>,

    /// Gain or loss - securities
    #[field(xpath = "/IRS990/GainOrLossGrp/SecuritiesAmt", line = "Part VIII Line 7c")]
    pub gain_or_loss_securities_amt: Option<i64>,

    /// Gain or loss - other
    #[field(xpath = "/IRS990/GainOrLossGrp/OtherAmt", line = "Part VIII Line 7c")]
    pub gain_or_loss_other_amt: Option<i64>,

    /// Net gain or loss from sales of assets - related or exempt function revenue
    #[field(
        xpath = "/IRS990/NetGainOrLossInvestmentsGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 7d Column B"
    )]
    pub net_gain_or_loss_related_amt: Option<i64>,

    /// Net gain or loss from sales of assets - unrelated business revenue
    #[field(
        xpath = "/IRS990/NetGainOrLossInvestmentsGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 7d Column C"
    )]
    pub net_gain_or_loss_unrelated_amt: Option<i64>,

    /// Net gain or loss from sales of assets - revenue excluded from tax
    #[field(xpath = "/IRS990/NetGainOrLossInvestmentsGrp/ExclusionAmt", line = "Part VIII Line 7d Column D")]
    pub net_gain_or_loss_exclusion_amt: Option<i64>,

    /// Net income from fundraising events - related or exempt function revenue
    #[field(
        xpath = "/IRS990/NetIncmFromFundraisingEvtGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 8c Column B"
    )]
    pub net_fundraising_related_amt: Option<i64>,

    /// Net income from fundraising events - unrelated business revenue
    #[field(
        xpath = "/IRS990/NetIncmFromFundraisingEvtGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 8c Column C"
    )]
    pub net_fundraising_unrelated_amt: Option<i64>,

    /// Net income from fundraising events - revenue excluded from tax
    #[field(xpath = "/IRS990/NetIncmFromFundraisingEvtGrp/ExclusionAmt", line = "Part VIII Line 8c Column D")]
    pub net_fundraising_exclusion_amt: Option<i64>,

    /// Gaming direct expenses
    #[field(xpath = "/IRS990/GamingDirectExpensesAmt", line = "Part VIII Line 9b")]
    pub gaming_direct_expenses_amt: Option<i64>,

    /// Net income from gaming activities - related or exempt function revenue
    #[field(
        xpath = "/IRS990/NetIncomeFromGamingGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 9c Column B"
    )]
    pub net_gaming_related_amt: Option<i64>,

    /// Net income from gaming activities - unrelated business revenue
    #[field(
        xpath = "/IRS990/NetIncomeFromGamingGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 9c Column C"
    )]
    pub net_gaming_unrelated_amt: Option<i64>,

    /// Net income from gaming activities - revenue excluded from tax
    #[field(xpath = "/IRS990/NetIncomeFromGamingGrp/ExclusionAmt", line = "Part VIII Line 9c Column D")]
    pub net_gaming_exclusion_amt: Option<i64>,

    /// Cost of goods sold
    #[field(xpath = "/IRS990/CostOfGoodsSoldAmt", line = "Part VIII Line 10b")]
    pub cost_of_goods_sold_amt: Option<i64>,

    /// Net income from sales of inventory - related or exempt function revenue
    #[field(
        xpath = "/IRS990/NetIncomeOrLossGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 10c Column B"
    )]
    pub net_inventory_related_amt: Option<i64>,

    /// Net income from sales of inventory - unrelated business revenue
    #[field(
        xpath = "/IRS990/NetIncomeOrLossGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 10c Column C"
    )]
    pub net_inventory_unrelated_amt: Option<i64>,

    /// Net income from sales of inventory - revenue excluded from tax
    #[field(xpath = "/IRS990/NetIncomeOrLossGrp/ExclusionAmt", line = "Part VIII Line 10c Column D")]
    pub net_inventory_exclusion_amt: Option<i64>,

    /// Total other revenue - related or exempt function revenue
    #[field(
        xpath = "/IRS990/MiscellaneousRevenueGrp/RelatedOrExemptFuncIncomeAmt",
        line = "Part VIII Line 11e Column B"
    )]
    pub miscellaneous_revenue_related_amt: Option<i64>,

    /// Total other revenue - unrelated business revenue
    #[field(
        xpath = "/IRS990/MiscellaneousRevenueGrp/UnrelatedBusinessRevenueAmt",
        line = "Part VIII Line 11e Column C"
    )]
    pub miscellaneous_revenue_unrelated_amt: Option<i64>,

    /// Total other revenue - revenue excluded from tax
    #[field(xpath = "/IRS990/MiscellaneousRevenueGrp/ExclusionAmt", line = "Part VIII Line 11e Column D")]
    pub miscellaneous_revenue_exclusion_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_prgrmsrvcrvn",
    form = "Form990",
    part = "Part VIII",
    description = "Program service revenue lines",
    group = "/IRS990/ProgramServiceRevenueGrp",
    parent = "return_part_viii"
)]
pub struct ProgramServiceRevenue {
    pub object_id: String,
    pub ein: String,

    /// Description
    #[field(xpath = "/IRS990/ProgramServiceRevenueGrp/Desc", line = "Part VIII Line 2")]
    pub desc: Option<String>,

    /// Business code
    #[field(xpath = "/IRS990/ProgramServiceRevenueGrp/BusinessCd", line = "Part VIII Line 2", max_length = 6)]
    pub business_cd: Option<String>,

    /// Total revenue
    #[field(xpath = "/IRS990/ProgramServiceRevenueGrp/TotalRevenueColumnAmt", line = "Part VIII Line 2 Column A")]
    pub total_revenue_column_amt: Option<i64>,

    /// Related or exempt function revenue
    #[field(xpath = "/IRS990/ProgramServiceRevenueGrp/RelatedOrExemptFuncIncomeAmt", line = "Part VIII Line 2 Column B")]
    pub related_or_exempt_func_income_amt: Option<i64>,

    /// Unrelated business revenue
    #[field(xpath = "/IRS990/ProgramServiceRevenueGrp/UnrelatedBusinessRevenueAmt", line = "Part VIII Line 2 Column C")]
    pub unrelated_business_revenue_amt: Option<i64>,

    /// Revenue excluded from tax
    #[field(xpath = "/IRS990/ProgramServiceRevenueGrp/ExclusionAmt", line = "Part VIII Line 2 Column D")]
    pub exclusion_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_othrrvnmsc",
    form = "Form990",
    part = "Part VIII",
    description = "Miscellaneous revenue lines",
    group = "/IRS990/OtherRevenueMiscGrp",
    parent = "return_part_viii"
)]
pub struct OtherRevenueMisc {
    pub object_id: String,
    pub ein: String,

    /// Description
    #[field(xpath = "/IRS990/OtherRevenueMiscGrp/Desc", line = "Part VIII Line 11")]
    pub desc: Option<String>,

    /// Business code
    #[field(xpath = "/IRS990/OtherRevenueMiscGrp/BusinessCd", line = "Part VIII Line 11", max_length = 6)]
    pub business_cd: Option<String>,

    /// Total revenue
    #[field(xpath = "/IRS990/OtherRevenueMiscGrp/TotalRevenueColumnAmt", line = "Part VIII Line 11 Column A")]
    pub total_revenue_column_amt: Option<i64>,

    /// Related or exempt function revenue
    #[field(xpath = "/IRS990/OtherRevenueMiscGrp/RelatedOrExemptFuncIncomeAmt", line = "Part VIII Line 11 Column B")]
    pub related_or_exempt_func_income_amt: Option<i64>,

    /// Unrelated business revenue
    #[field(xpath = "/IRS990/OtherRevenueMiscGrp/UnrelatedBusinessRevenueAmt", line = "Part VIII Line 11 Column C")]
    pub unrelated_business_revenue_amt: Option<i64>,

    /// Revenue excluded from tax
    #[field(xpath = "/IRS990/OtherRevenueMiscGrp/ExclusionAmt", line = "Part VIII Line 11 Column D")]
    pub exclusion_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_part_ix", form = "Form990", part = "Part IX", description = "Statement of functional expenses")]
pub struct PartIX {
    pub object_id: String,
    pub ein: String,

    /// Grants to domestic organizations - total
    #[field(xpath = "/IRS990/GrantsToDomesticOrgsGrp/TotalAmt", line = "Part IX Line 1 Column A")]
    pub grants_to_domestic_orgs_total_amt: Option<i64>,

    /// Grants to domestic individuals - total
    #[field(xpath = "/IRS990/GrantsToDomesticIndividualsGrp/TotalAmt", line = "Part IX Line 2 Column A")]
    pub grants_to_domestic_individuals_total_amt: Option<i64>,

    /// Foreign grants - total
    #[field(xpath = "/IRS990/ForeignGrantsGrp/TotalAmt", line = "Part IX Line 3 Column A")]
    pub foreign_grants_total_amt: Option<i64>,

    /// Compensation of current officers - total
    #[field(xpath = "/IRS990/CompCurrentOfcrDirectorsGrp/TotalAmt", line = "Part IX Line 5 Column A")]
    pub comp_current_ofcr_total_amt: Option<i64>,

    /// Compensation of current officers - program services
    #[field(xpath = "/IRS990/CompCurrentOfcrDirectorsGrp/ProgramServicesAmt", line = "Part IX Line 5 Column B")]
    pub comp_current_ofcr_program_amt: Option<i64>,

    /// Compensation of current officers - management and general
    #[field(xpath = "/IRS990/CompCurrentOfcrDirectorsGrp/ManagementAndGeneralAmt", line = "Part IX Line 5 Column C")]
    pub comp_current_ofcr_management_amt: Option<i64>,

    /// Compensation of current officers - fundraising
    #[field(xpath = "/IRS990/CompCurrentOfcrDirectorsGrp/FundraisingAmt", line = "Part IX Line 5 Column D")]
    pub comp_current_ofcr_fundraising_amt: Option<i64>,

    /// Other salaries and wages - total
    #[field(xpath = "/IRS990/OtherSalariesAndWagesGrp/TotalAmt", line = "Part IX Line 7 Column A")]
    pub other_salaries_total_amt: Option<i64>,

    /// Pension plan contributions - total
    #[field(xpath = "/IRS990/PensionPlanContributionsGrp/TotalAmt", line = "Part IX Line 8 Column A")]
    pub pension_plan_total_amt: Option<i64>,

    /// Other employee benefits - total
    #[field(xpath = "/IRS990/OtherEmployeeBenefitsGrp/TotalAmt", line = "Part IX Line 9 Column A")]
    pub other_employee_benefits_total_amt: Option<i64>,

    /// Payroll taxes - total
    #[field(xpath = "/IRS990/PayrollTaxesGrp/TotalAmt", line = "Part IX Line 10 Column A")]
    pub payroll_taxes_total_amt: Option<i64>,

    /// Legal fees - total
    #[field(xpath = "/IRS990/FeesForServicesLegalGrp/TotalAmt", line = "Part IX Line 11b Column A")]
    pub legal_fees_total_amt: Option<i64>,

    /// Accounting fees - total
    #[field(xpath = "/IRS990/FeesForServicesAccountingGrp/TotalAmt", line = "Part IX Line 11c Column A")]
    pub accounting_fees_total_amt: Option<i64>,

    /// Other fees for services - total
    #[field(xpath = "/IRS990/FeesForServicesOtherGrp/TotalAmt", line = "Part IX Line 11g Column A")]
    pub other_fees_total_amt: Option<i64>,

    /// Advertising and promotion - total
    #[field(xpath = "/IRS990/AdvertisingGrp/TotalAmt", line = "Part IX Line 12 Column A")]
    pub advertising_total_amt: Option<i64>,

    /// Office expenses - total
    #[field(xpath = "/IRS990/OfficeExpensesGrp/TotalAmt", line = "Part IX Line 13 Column A")]
    pub office_expenses_total_amt: Option<i64>,

    /// Information technology - total
    #[field(xpath = "/IRS990/InformationTechnologyGrp/TotalAmt", line = "Part IX Line 14 Column A")]
    pub information_technology_total_amt: Option<i64>,

    /// Occupancy - total
    #[field(xpath = "/IRS990/OccupancyGrp/TotalAmt", line = "Part IX Line 16 Column A")]
    pub occupancy_total_amt: Option<i64>,

    /// Travel - total
    #[field(xpath = "/IRS990/TravelGrp/TotalAmt", line = "Part IX Line 17 Column A")]
    pub travel_total_amt: Option<i64>,

    /// Conferences and meetings - total
    #[field(xpath = "/IRS990/ConferencesMeetingsGrp/TotalAmt", line = "Part IX Line 19 Column A")]
    pub conferences_meetings_total_amt: Option<i64>,

    /// Interest - total
    #[field(xpath = "/IRS990/InterestGrp/TotalAmt", line = "Part IX Line 20 Column A")]
    pub interest_total_amt: Option<i64>,

    /// Depreciation and depletion - total
    #[field(xpath = "/IRS990/DepreciationDepletionGrp/TotalAmt", line = "Part IX Line 22 Column A")]
    pub depreciation_depletion_total_amt: Option<i64>,

    /// Insurance - total
    #[field(xpath = "/IRS990/InsuranceGrp/TotalAmt", line = "Part IX Line 23 Column A")]
    pub insurance_total_amt: Option<i64>,

    /// Total functional expenses
    #[field(
        xpath = "/IRS990/TotalFunctionalExpensesGrp/TotalAmt",
        line = "Part IX Line 25 Column A",
        alias = "/IRS990/TotalFunctionalExpenses/Total"
    )]
    pub total_functional_expenses_amt: Option<i64>,

    /// Total program service expenses
    #[field(
        xpath = "/IRS990/TotalFunctionalExpensesGrp/ProgramServicesAmt",
        line = "Part IX Line 25 Column B",
        alias = "/IRS990/TotalFunctionalExpenses/ProgramServices"
    )]
    pub total_program_services_amt: Option<i64>,

    /// Total management and general expenses
    #[field(
        xpath = "/IRS990/TotalFunctionalExpensesGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 25 Column C",
        alias = "/IRS990/TotalFunctionalExpenses/ManagementAndGeneral"
    )]
    pub total_management_and_general_amt: Option<i64>,

    /// Total fundraising expenses
    #[field(
        xpath = "/IRS990/TotalFunctionalExpensesGrp/FundraisingAmt",
        line = "Part IX Line 25 Column D",
        alias = "/IRS990/TotalFunctionalExpenses/Fundraising"
    )]
    pub total_fundraising_amt: Option<i64>,

    /// Joint costs from a combined educational campaign
    #[field(xpath = "/IRS990/JointCostsInd", line = "Part IX Line 26", max_length = 5)]
    pub joint_costs_ind: Option<String>,

    /// Grants to domestic organizations and governments - program service expenses
    #[field(xpath = "/IRS990/GrantsToDomesticOrgsGrp/ProgramServicesAmt", line = "Part IX Line 1 Column B")]
    pub grants_to_domestic_orgs_program_amt: Option<i64>,

    /// Grants to domestic individuals - program service expenses
    #[field(
        xpath = "/IRS990/GrantsToDomesticIndividualsGrp/ProgramServicesAmt",
        line = "Part IX Line 2 Column B"
    )]
    pub grants_to_domestic_individuals_program_amt: Option<i64>,

    /// Grants to foreign organizations and individuals - program service expenses
    #[field(xpath = "/IRS990/ForeignGrantsGrp/ProgramServicesAmt", line = "Part IX Line 3 Column B")]
    pub foreign_grants_program_amt: Option<i64>,

    /// Benefits paid to or for members - total expenses
    #[field(xpath = "/IRS990/BenefitsToMembersGrp/TotalAmt", line = "Part IX Line 4 Column A")]
    pub benefits_to_members_total_amt: Option<i64>,

    /// Benefits paid to or for members - program service expenses
    #[field(xpath = "/IRS990/BenefitsToMembersGrp/ProgramServicesAmt", line = "Part IX Line 4 Column B")]
    pub benefits_to_members_program_amt: Option<i64>,

    /// Compensation to disqualified persons - total expenses
    #[field(xpath = "/IRS990/CompDisqualPersonsGrp/TotalAmt", line = "Part IX Line 6 Column A")]
    pub comp_disqual_persons_total_amt: Option<i64>,

    /// Compensation to disqualified persons - program service expenses
    #[field(xpath = "/IRS990/CompDisqualPersonsGrp/ProgramServicesAmt", line = "Part IX Line 6 Column B")]
    pub comp_disqual_persons_program_amt: Option<i64>,

    /// Compensation to disqualified persons - management and general expenses
    #[field(
        xpath = "/IRS990/CompDisqualPersonsGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 6 Column C"
    )]
    pub comp_disqual_persons_management_amt: Option<i64>,

    /// Compensation to disqualified persons - fundraising expenses
    #[field(xpath = "/IRS990/CompDisqualPersonsGrp/FundraisingAmt", line = "Part IX Line 6 Column D")]
    pub comp_disqual_persons_fundraising_amt: Option<i64>,

    /// Other salaries and wages - program service expenses
    #[field(xpath = "/IRS990/OtherSalariesAndWagesGrp/ProgramServicesAmt", line = "Part IX Line 7 Column B")]
    pub other_salaries_program_amt: Option<i64>,

    /// Other salaries and wages - management and general expenses
    #[field(
        xpath = "/IRS990/OtherSalariesAndWagesGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 7 Column C"
    )]
    pub other_salaries_management_amt: Option<i64>,

    /// Other salaries and wages - fundraising expenses
    #[field(xpath = "/IRS990/OtherSalariesAndWagesGrp/FundraisingAmt", line = "Part IX Line 7 Column D")]
    pub other_salaries_fundraising_amt: Option<i64>,

    /// Pension plan accruals and contributions - program service expenses
    #[field(
        xpath = "/IRS990/PensionPlanContributionsGrp/ProgramServicesAmt",
        line = "Part IX Line 8 Column B"
    )]
    pub pension_plan_program_amt: Option<i64>,

    /// Pension plan accruals and contributions - management and general expenses
    #[field(
        xpath = "/IRS990/PensionPlanContributionsGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 8 Column C"
    )]
    pub pension_plan_management_amt: Option<i64>,

    /// Pension plan accruals and contributions - fundraising expenses
    #[field(xpath = "/IRS990/PensionPlanContributionsGrp/FundraisingAmt", line = "Part IX Line 8 Column D")]
    pub pension_plan_fundraising_amt: Option<i64>,

    /// Other employee benefits - program service expenses
    #[field(xpath = "/IRS990/OtherEmployeeBenefitsGrp/ProgramServicesAmt", line = "Part IX Line 9 Column B")]
    pub other_employee_benefits_program_amt: Option<i64>,

    /// Other employee benefits - management and general expenses
    #[field(
        xpath = "/IRS990/OtherEmployeeBenefitsGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 9 Column C"
    )]
    pub other_employee_benefits_management_amt: Option<i64>,

    /// Other employee benefits - fundraising expenses
    #[field(xpath = "/IRS990/OtherEmployeeBenefitsGrp/FundraisingAmt", line = "Part IX Line 9 Column D")]
    pub other_employee_benefits_fundraising_amt: Option<i64>,

    /// Payroll taxes - program service expenses
    #[field(xpath = "/IRS990/PayrollTaxesGrp/ProgramServicesAmt", line = "Part IX Line 10 Column B")]
    pub payroll_taxes_program_amt: Option<i64>,

    /// Payroll taxes - management and general expenses
    #[field(xpath = "/IRS990/PayrollTaxesGrp/ManagementAndGeneralAmt", line = "Part IX Line 10 Column C")]
    pub payroll_taxes_management_amt: Option<i64>,

    /// Payroll taxes - fundraising expenses
    #[field(xpath = "/IRS990/PayrollTaxesGrp/FundraisingAmt", line = "Part IX Line 10 Column D")]
    pub payroll_taxes_fundraising_amt: Option<i64>,

    /// Fees for services: management - total expenses
    #[field(xpath = "/IRS990/FeesForServicesManagementGrp/TotalAmt", line = "Part IX Line 11a Column A")]
    pub management_fees_total_amt: Option<i64>,

    /// Fees for services: management - program service expenses
    #[field(
        xpath = "/IRS990/FeesForServicesManagementGrp/ProgramServicesAmt",
        line = "Part IX Line 11a Column B"
    )]
    pub management_fees_program_amt: Option<i64>,

    /// Fees for services: management - management and general expenses
    #[field(
        xpath = "/IRS990/FeesForServicesManagementGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 11a Column C"
    )]
    pub management_fees_management_amt: Option<i64>,

    /// Fees for services: management - fundraising expenses
    #[field(
        xpath = "/IRS990/FeesForServicesManagementGrp/FundraisingAmt",
        line = "Part IX Line 11a Column D"
    )]
    pub management_fees_fundraising_amt: Option<i64>,

    /// Fees for services: legal - program service expenses
    #[field(xpath = "/IRS990/FeesForServicesLegalGrp/ProgramServicesAmt", line = "Part IX Line 11b Column B")]
    pub legal_fees_program_amt: Option<i64>,

    /// Fees for services: legal - management and general expenses
    #[field(
        xpath = "/IRS990/FeesForServicesLegalGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 11b Column C"
    )]
    pub legal_fees_management_amt: Option<i64>,

    /// Fees for services: legal - fundraising expenses
    #[field(xpath = "/IRS990/FeesForServicesLegalGrp/FundraisingAmt", line = "Part IX Line 11b Column D")]
    pub legal_fees_fundraising_amt: Option<i64>,

    /// Fees for services: accounting - program service expenses
    #[field(
        xpath = "/IRS990/FeesForServicesAccountingGrp/ProgramServicesAmt",
        line = "Part IX Line 11c Column B"
    )]
    pub accounting_fees_program_amt: Option<i64>,

    /// Fees for services: accounting - management and general expenses
    #[field(
        xpath = "/IRS990/FeesForServicesAccountingGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 11c Column C"
    )]
    pub accounting_fees_management_amt: Option<i64>,

    /// Fees for services: accounting - fundraising expenses
    #[field(
        xpath = "/IRS990/FeesForServicesAccountingGrp/FundraisingAmt",
        line = "Part IX Line 11c Column D"
    )]
    pub accounting_fees_fundraising_amt: Option<i64>,

    /// Fees for services: lobbying - total expenses
    #[field(xpath = "/IRS990/FeesForServicesLobbyingGrp/TotalAmt", line = "Part IX Line 11d Column A")]
    pub lobbying_fees_total_amt: Option<i64>,

    /// Fees for services: lobbying - program service expenses
    #[field(
        xpath = "/IRS990/FeesForServicesLobbyingGrp/ProgramServicesAmt",
        line = "Part IX Line 11d Column B"
    )]
    pub lobbying_fees_program_amt: Option<i64>,

    /// Fees for services: lobbying - management and general expenses
    #[field(
        xpath = "/IRS990/FeesForServicesLobbyingGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 11d Column C"
    )]
    pub lobbying_fees_management_amt: Option<i64>,

    /// Fees for services: lobbying - fundraising expenses
    #[field(xpath = "/IRS990/FeesForServicesLobbyingGrp/FundraisingAmt", line = "Part IX Line 11d Column D")]
    pub lobbying_fees_fundraising_amt: Option<i64>,

    /// Fees for services: professional fundraising - total expenses
    #[field(xpath = "/IRS990/FeesForServicesProfFundraising/TotalAmt", line = "Part IX Line 11e Column A")]
    pub fundraising_fees_total_amt: Option<i64>,

    /// Fees for services: professional fundraising - program service expenses
    #[field(
        xpath = "/IRS990/FeesForServicesProfFundraising/ProgramServicesAmt",
        line = "Part IX Line 11e Column B"
    )]
    pub fundraising_fees_program_amt: Option<i64>,

    /// Fees for services: professional fundraising - management and general expenses
    #[field(
        xpath = "/IRS990/FeesForServicesProfFundraising/ManagementAndGeneralAmt",
        line = "Part IX Line 11e Column C"
    )]
    pub fundraising_fees_management_amt: Option<i64>,

    /// Fees for services: professional fundraising - fundraising expenses
    #[field(
        xpath = "/IRS990/FeesForServicesProfFundraising/FundraisingAmt",
        line = "Part IX Line 11e Column D"
    )]
    pub fundraising_fees_fundraising_amt: Option<i64>,

    /// Fees for services: investment management - total expenses
    #[field(xpath = "/IRS990/FeesForSrvcInvstMgmntFeesGrp/TotalAmt", line = "Part IX Line 11f Column A")]
    pub investment_management_fees_total_amt: Option<i64>,

    /// Fees for services: investment management - program service expenses
    #[field(
        xpath = "/IRS990/FeesForSrvcInvstMgmntFeesGrp/ProgramServicesAmt",
        line = "Part IX Line 11f Column B"
    )]
    pub investment_management_fees_program_amt: Option<i64>,

    /// Fees for services: investment management - management and general expenses
    #[field(
        xpath = "/IRS990/FeesForSrvcInvstMgmntFeesGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 11f Column C"
    )]
    pub investment_management_fees_management_amt: Option<i64>,

    /// Fees for services: investment management - fundraising expenses
    #[field(
        xpath = "/IRS990/FeesForSrvcInvstMgmntFeesGrp/FundraisingAmt",
        line = "Part IX Line 11f Column D"
    )]
    pub investment_management_fees_fundraising_amt: Option<i64>,

    /// Fees for services: other - program service expenses
    #[field(xpath = "/IRS990/FeesForServicesOtherGrp/ProgramServicesAmt", line = "Part IX Line 11g Column B")]
    pub other_fees_program_amt: Option<i64>,

    /// Fees for services: other - management and general expenses
    #[field(
        xpath = "/IRS990/FeesForServicesOtherGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 11g Column C"
    )]
    pub other_fees_management_amt: Option<i64>,

    /// Fees for services: other - fundraising expenses
    #[field(xpath = "/IRS990/FeesForServicesOtherGrp/FundraisingAmt", line = "Part IX Line 11g Column D")]
    pub other_fees_fundraising_amt: Option<i64>,

    /// Advertising and promotion - program service expenses
    #[field(xpath = "/IRS990/AdvertisingGrp/ProgramServicesAmt", line = "Part IX Line 12 Column B")]
    pub advertising_program_amt: Option<i64>,

    /// Advertising and promotion - management and general expenses
    #[field(xpath = "/IRS990/AdvertisingGrp/ManagementAndGeneralAmt", line = "Part IX Line 12 Column C")]
    pub advertising_management_amt: Option<i64>,

    /// Advertising and promotion - fundraising expenses
    #[field(xpath = "/IRS990/AdvertisingGrp/FundraisingAmt", line = "Part IX Line 12 Column D")]
    pub advertising_fundraising_amt: Option<i64>,

    /// Office expenses - program service expenses
    #[field(xpath = "/IRS990/OfficeExpensesGrp/ProgramServicesAmt", line = "Part IX Line 13 Column B")]
    pub office_expenses_program_amt: Option<i64>,

    /// Office expenses - management and general expenses
    #[field(xpath = "/IRS990/OfficeExpensesGrp/ManagementAndGeneralAmt", line = "Part IX Line 13 Column C")]
    pub office_expenses_management_amt: Option<i64>,

    /// Office expenses - fundraising expenses
    #[field(xpath = "/IRS990/OfficeExpensesGrp/FundraisingAmt", line = "Part IX Line 13 Column D")]
    pub office_expenses_fundraising_amt: Option<i64>,

    /// Information technology - program service expenses
    #[field(xpath = "/IRS990/InformationTechnologyGrp/ProgramServicesAmt", line = "Part IX Line 14 Column B")]
    pub information_technology_program_amt: Option<i64>,

    /// Information technology - management and general expenses
    #[field(
        xpath = "/IRS990/InformationTechnologyGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 14 Column C"
    )]
    pub information_technology_management_amt: Option<i64>,

    /// Information technology - fundraising expenses
    #[field(xpath = "/IRS990/InformationTechnologyGrp/FundraisingAmt", line = "Part IX Line 14 Column D")]
    pub information_technology_fundraising_amt: Option<i64>,

    /// Royalties - total expenses
    #[field(xpath = "/IRS990/RoyaltiesGrp/TotalAmt", line = "Part IX Line 15 Column A")]
    pub royalties_total_amt: Option<i64>,

    /// Royalties - program service expenses
    #[field(xpath = "/IRS990/RoyaltiesGrp/ProgramServicesAmt", line = "Part IX Line 15 Column B")]
    pub royalties_program_amt: Option<i64>,

    /// Royalties - management and general expenses
    #[field(xpath = "/IRS990/RoyaltiesGrp/ManagementAndGeneralAmt", line = "Part IX Line 15 Column C")]
    pub royalties_management_amt: Option<i64>,

    /// Royalties - fundraising expenses
    #[field(xpath = "/IRS990/RoyaltiesGrp/FundraisingAmt", line = "Part IX Line 15 Column D")]
    pub royalties_fundraising_amt: Option<i64>,

    /// Occupancy - program service expenses
    #[field(xpath = "/IRS990/OccupancyGrp/ProgramServicesAmt", line = "Part IX Line 16 Column B")]
    pub occupancy_program_amt: Option<i64>,

    /// Occupancy - management and general expenses
    #[field(xpath = "/IRS990/OccupancyGrp/ManagementAndGeneralAmt", line = "Part IX Line 16 Column C")]
    pub occupancy_management_amt: Option<i64>,

    /// Occupancy - fundraising expenses
    #[field(xpath = "/IRS990/OccupancyGrp/FundraisingAmt", line = "Part IX Line 16 Column D")]
    pub occupancy_fundraising_amt: Option<i64>,

    /// Travel - program service expenses
    #[field(xpath = "/IRS990/TravelGrp/ProgramServicesAmt", line = "Part IX Line 17 Column B")]
    pub travel_program_amt: Option<i64>,

    /// Travel - management and general expenses
    #[field(xpath = "/IRS990/TravelGrp/ManagementAndGeneralAmt", line = "Part IX Line 17 Column C")]
    pub travel_management_amt: Option<i64>,

    /// Travel - fundraising expenses
    #[field(xpath = "/IRS990/TravelGrp/FundraisingAmt", line = "Part IX Line 17 Column D")]
    pub travel_fundraising_amt: Option<i64>,

    /// Travel or entertainment for public officials - total expenses
    #[field(xpath = "/IRS990/PymtTravelEntrtnmntPubOfclGrp/TotalAmt", line = "Part IX Line 18 Column A")]
    pub public_official_travel_total_amt: Option<i64>,

    /// Travel or entertainment for public officials - program service expenses
    #[field(
        xpath = "/IRS990/PymtTravelEntrtnmntPubOfclGrp/ProgramServicesAmt",
        line = "Part IX Line 18 Column B"
    )]
    pub public_official_travel_program_amt: Option<i64>,

    /// Travel or entertainment for public officials - management and general expenses
    #[field(
        xpath = "/IRS990/PymtTravelEntrtnmntPubOfclGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 18 Column C"
    )]
    pub public_official_travel_management_amt: Option<i64>,

    /// Travel or entertainment for public officials - fundraising expenses
    #[field(
        xpath = "/IRS990/PymtTravelEntrtnmntPubOfclGrp/FundraisingAmt",
        line = "Part IX Line 18 Column D"
    )]
    pub public_official_travel_fundraising_amt: Option<i64>,

    /// Conferences, conventions and meetings - program service expenses
    #[field(xpath = "/IRS990/ConferencesMeetingsGrp/ProgramServicesAmt", line = "Part IX Line 19 Column B")]
    pub conferences_meetings_program_amt: Option<i64>,

    /// Conferences, conventions and meetings - management and general expenses
    #[field(
        xpath = "/IRS990/ConferencesMeetingsGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 19 Column C"
    )]
    pub conferences_meetings_management_amt: Option<i64>,

    /// Conferences, conventions and meetings - fundraising expenses
    #[field(xpath = "/IRS990/ConferencesMeetingsGrp/FundraisingAmt", line = "Part IX Line 19 Column D")]
    pub conferences_meetings_fundraising_amt: Option<i64>,

    /// Interest - program service expenses
    #[field(xpath = "/IRS990/InterestGrp/ProgramServicesAmt", line = "Part IX Line 20 Column B")]
    pub interest_program_amt: Option<i64>,

    /// Interest - management and general expenses
    #[field(xpath = "/IRS990/InterestGrp/ManagementAndGeneralAmt", line = "Part IX Line 20 Column C")]
    pub interest_management_amt: Option<i64>,

    /// Interest - fundraising expenses
    #[field(xpath = "/IRS990/InterestGrp/FundraisingAmt", line = "Part IX Line 20 Column D")]
    pub interest_fundraising_amt: Option<i64>,

    /// Payments to affiliates - total expenses
    #[field(xpath = "/IRS990/PaymentsToAffiliatesGrp/TotalAmt", line = "Part IX Line 21 Column A")]
    pub payments_to_affiliates_total_amt: Option<i64>,

    /// Payments to affiliates - program service expenses
    #[field(xpath = "/IRS990/PaymentsToAffiliatesGrp/ProgramServicesAmt", line = "Part IX Line 21 Column B")]
    pub payments_to_affiliates_program_amt: Option<i64>,

    /// Payments to affiliates - management and general expenses
    #[field(
        xpath = "/IRS990/PaymentsToAffiliatesGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 21 Column C"
    )]
    pub payments_to_affiliates_management_amt: Option<i64>,

    /// Payments to affiliates - fundraising expenses
    #[field(xpath = "/IRS990/PaymentsToAffiliatesGrp/FundraisingAmt", line = "Part IX Line 21 Column D")]
    pub payments_to_affiliates_fundraising_amt: Option<i64>,

    /// Depreciation, depletion and amortization - program service expenses
    #[field(xpath = "/IRS990/DepreciationDepletionGrp/ProgramServicesAmt", line = "Part IX Line 22 Column B")]
    pub depreciation_depletion_program_amt: Option<i64>,

    /// Depreciation, depletion and amortization - management and general expenses
    #[field(
        xpath = "/IRS990/DepreciationDepletionGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 22 Column C"
    )]
    pub depreciation_depletion_management_amt: Option<i64>,

    /// Depreciation, depletion and amortization - fundraising expenses
    #[field(xpath = "/IRS990/DepreciationDepletionGrp/FundraisingAmt", line = "Part IX Line 22 Column D")]
    pub depreciation_depletion_fundraising_amt: Option<i64>,

    /// Insurance - program service expenses
    #[field(xpath = "/IRS990/InsuranceGrp/ProgramServicesAmt", line = "Part IX Line 23 Column B")]
    pub insurance_program_amt: Option<i64>,

    /// Insurance - management and general expenses
    #[field(xpath = "/IRS990/InsuranceGrp/ManagementAndGeneralAmt", line = "Part IX Line 23 Column C")]
    pub insurance_management_amt: Option<i64>,

    /// Insurance - fundraising expenses
    #[field(xpath = "/IRS990/InsuranceGrp/FundraisingAmt", line = "Part IX Line 23 Column D")]
    pub insurance_fundraising_amt: Option<i64>,

    /// All other expenses - total expenses
    #[field(xpath = "/IRS990/AllOtherExpensesGrp/TotalAmt", line = "Part IX Line 24e Column A")]
    pub all_other_expenses_total_amt: Option<i64>,

    /// All other expenses - program service expenses
    #[field(xpath = "/IRS990/AllOtherExpensesGrp/ProgramServicesAmt", line = "Part IX Line 24e Column B")]
    pub all_other_expenses_program_amt: Option<i64>,

    /// All other expenses - management and general expenses
    #[field(
        xpath = "/IRS990/AllOtherExpensesGrp/ManagementAndGeneralAmt",
        line = "Part IX Line 24e Column C"
    )]
    pub all_other_expenses_management_amt: Option<i64>,

    /// All other expenses - fundraising expenses
    #[field(xpath = "/IRS990/AllOtherExpensesGrp/FundraisingAmt", line = "Part IX Line 24e Column D")]
    pub all_other_expenses_fundraising_amt: Option<i64>,

    /// Joint costs - total expenses
    #[field(xpath = "/IRS990/JointCostsGrp/TotalAmt", line = "Part IX Line 26 Column A")]
    pub joint_costs_total_amt: Option<i64>,

    /// Joint costs - program service expenses
    #[field(xpath = "/IRS990/JointCostsGrp/ProgramServicesAmt", line = "Part IX Line 26 Column B")]
    pub joint_costs_program_amt: Option<i64>,

    /// Joint costs - management and general expenses
    #[field(xpath = "/IRS990/JointCostsGrp/ManagementAndGeneralAmt", line = "Part IX Line 26 Column C")]
    pub joint_costs_management_amt: Option<i64>,

    /// Joint costs - fundraising expenses
    #[field(xpath = "/IRS990/JointCostsGrp/FundraisingAmt", line = "Part IX Line 26 Column D")]
    pub joint_costs_fundraising_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_othrexpnss",
    form = "Form990",
    part = "Part IX",
    description = "Other expense lines",
    group = "/IRS990/OtherExpensesGrp",
    parent = "return_part_ix"
)]
pub struct OtherExpenses {
    pub object_id: String,
    pub ein: String,

    /// Description
    #[field(xpath = "/IRS990/OtherExpensesGrp/Desc", line = "Part IX Line 24")]
    pub desc: Option<String>,

    /// Total
    #[field(xpath = "/IRS990/OtherExpensesGrp/TotalAmt", line = "Part IX Line 24 Column A")]
    pub total_amt: Option<i64>,

    /// Program services
    #[field(xpath = "/IRS990/OtherExpensesGrp/ProgramServicesAmt", line = "Part IX Line 24 Column B")]
    pub program_services_amt: Option<i64>,

    /// Management and general
    #[field(xpath = "/IRS990/OtherExpensesGrp/ManagementAndGeneralAmt", line = "Part IX Line 24 Column C")]
    pub management_and_general_amt: Option<i64>,

    /// Fundraising
    #[field(xpath = "/IRS990/OtherExpensesGrp/FundraisingAmt", line = "Part IX Line 24 Column D")]
    pub fundraising_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_part_x", form = "Form990", part = "Part X", description = "Balance sheet")]
pub struct PartX {
    pub object_id: String,
    pub ein: String,

    /// Cash, non-interest-bearing - BOY
    #[field(xpath = "/IRS990/CashNonInterestBearingGrp/BOYAmt", line = "Part X Line 1")]
    pub cash_non_interest_bearing_boy_amt: Option<i64>,

    /// Cash, non-interest-bearing - EOY
    #[field(xpath = "/IRS990/CashNonInterestBearingGrp/EOYAmt", line = "Part X Line 1")]
    pub cash_non_interest_bearing_eoy_amt: Option<i64>,

    /// Savings and temporary cash investments - BOY
    #[field(xpath = "/IRS990/SavingsAndTempCashInvstGrp/BOYAmt", line = "Part X Line 2")]
    pub savings_boy_amt: Option<i64>,

    /// Savings and temporary cash investments - EOY
    #[field(xpath = "/IRS990/SavingsAndTempCashInvstGrp/EOYAmt", line = "Part X Line 2")]
    pub savings_eoy_amt: Option<i64>,

    /// Pledges and grants receivable - BOY
    #[field(xpath = "/IRS990/PledgesAndGrantsReceivableGrp/BOYAmt", line = "Part X Line 3")]
    pub pledges_boy_amt: Option<i64>,

    /// Pledges and grants receivable - EOY
    #[field(xpath = "/IRS990/PledgesAndGrantsReceivableGrp/EOYAmt", line = "Part X Line 3")]
    pub pledges_eoy_amt: Option<i64>,

    /// Accounts receivable - BOY
    #[field(xpath = "/IRS990/AccountsReceivableGrp/BOYAmt", line = "Part X Line 4")]
    pub accounts_receivable_boy_amt: Option<i64>,

    /// Accounts receivable - EOY
    #[field(xpath = "/IRS990/AccountsReceivableGrp/EOYAmt", line = "Part X Line 4")]
    pub accounts_receivable_eoy_amt: Option<i64>,

    /// Land, buildings and equipment cost or other basis
    #[field(xpath = "/IRS990/LandBldgEquipCostOrOtherBssAmt", line = "Part X Line 10a")]
    pub land_bldg_equip_cost_amt: Option<i64>,

    /// Land, buildings and equipment accumulated depreciation
    #[field(xpath = "/IRS990/LandBldgEquipAccumDeprecAmt", line = "Part X Line 10b")]
    pub land_bldg_equip_accum_deprec_amt: Option<i64>,

    /// Land, buildings and equipment, net - BOY
    #[field(xpath = "/IRS990/LandBldgEquipBasisNetGrp/BOYAmt", line = "Part X Line 10c")]
    pub land_bldg_equip_net_boy_amt: Option<i64>,

    /// Land, buildings and equipment, net - EOY
    #[field(xpath = "/IRS990/LandBldgEquipBasisNetGrp/EOYAmt", line = "Part X Line 10c")]
    pub land_bldg_equip_net_eoy_amt: Option<i64>,

    /// Investments, publicly traded securities - BOY
    #[field(xpath = "/IRS990/InvestmentsPubTradedSecGrp/BOYAmt", line = "Part X Line 11")]
    pub investments_pub_traded_boy_amt: Option<i64>,

    /// Investments, publicly traded securities - EOY
    #[field(xpath = "/IRS990/InvestmentsPubTradedSecGrp/EOYAmt", line = "Part X Line 11")]
    pub investments_pub_traded_eoy_amt: Option<i64>,

    /// Total assets - BOY
    #[field(xpath = "/IRS990/TotalAssetsGrp/BOYAmt", line = "Part X Line 16", alias = "/IRS990/TotalAssets/BOY")]
    pub total_assets_boy_amt: Option<i64>,

    /// Total assets - EOY
    #[field(xpath = "/IRS990/TotalAssetsGrp/EOYAmt", line = "Part X Line 16", alias = "/IRS990/TotalAssets/EOY")]
    pub total_assets_eoy_amt: Option<i64>,

    /// Accounts payable and accrued expenses - BOY
    #[field(xpath = "/IRS990/AccountsPayableAccrExpnssGrp/BOYAmt", line = "Part X Line 17")]
    pub accounts_payable_boy_amt: Option<i64>,

    /// Accounts payable and accrued expenses - EOY
    #[field(xpath = "/IRS990/AccountsPayableAccrExpnssGrp/EOYAmt", line = "Part X Line 17")]
    pub accounts_payable_eoy_amt: Option<i64>,

    /// Tax-exempt bond liabilities - EOY
    #[field(xpath = "/IRS990/TaxExemptBondLiabilitiesGrp/EOYAmt", line = "Part X Line 20")]
    pub tax_exempt_bond_liabilities_eoy_amt: Option<i64>,

    /// Secured mortgages and notes payable - EOY
    #[field(xpath = "/IRS990/MortgNotesPyblScrdInvstPropGrp/EOYAmt", line = "Part X Line 23")]
    pub mortgages_eoy_amt: Option<i64>,

    /// Total liabilities - BOY
    #[field(xpath = "/IRS990/TotalLiabilitiesGrp/BOYAmt", line = "Part X Line 26", alias = "/IRS990/TotalLiabilities/BOY")]
    pub total_liabilities_boy_amt: Option<i64>,

    /// Total liabilities - EOY
    #[field(xpath = "/IRS990/TotalLiabilitiesGrp/EOYAmt", line = "Part X Line 26", alias = "/IRS990/TotalLiabilities/EOY")]
    pub total_liabilities_eoy_amt: Option<i64>,

    /// Organization follows FASB ASC 958
    #[field(
        xpath = "/IRS990/OrganizationFollowsFASB117Ind",
        line = "Part X Line 27",
        max_length = 5,
        alias = "/IRS990/OrganizationFollowsSFAS117Ind"
    )]
    pub organization_follows_sfas117_ind: Option<String>,

    /// Net assets without donor restrictions - EOY
    #[field(
        xpath = "/IRS990/NoDonorRestrictionNetAssetsGrp/EOYAmt",
        line = "Part X Line 27",
        alias = "/IRS990/UnrestrictedNetAssetsGrp/EOYAmt"
    )]
    pub no_donor_restriction_eoy_amt: Option<i64>,

    /// Net assets with donor restrictions - EOY
    #[field(xpath = "/IRS990/DonorRestrictionNetAssetsGrp/EOYAmt", line = "Part X Line 28")]
    pub donor_restriction_eoy_amt: Option<i64>,

    /// Total net assets or fund balances - BOY
    #[field(xpath = "/IRS990/TotalNetAssetsFundBalanceGrp/BOYAmt", line = "Part X Line 32")]
    pub total_net_assets_boy_amt: Option<i64>,

    /// Total net assets or fund balances - EOY
    #[field(xpath = "/IRS990/TotalNetAssetsFundBalanceGrp/EOYAmt", line = "Part X Line 32")]
    pub total_net_assets_eoy_amt: Option<i64>,

    /// Total liabilities and net assets - EOY
    #[field(xpath = "/IRS990/TotLiabNetAssetsFundBalanceGrp/EOYAmt", line = "Part X Line 33")]
    pub total_liab_net_assets_eoy_amt: Option<i64>,

    /// Loans and receivables from current and former officers - beginning of year
    #[field(xpath = "/IRS990/ReceivablesFromOfficersEtcGrp/BOYAmt", line = "Part X Line 5 Column A")]
    pub receivables_from_officers_boy_amt: Option<i64>,

    /// Loans and receivables from current and former officers - end of year
    #[field(xpath = "/IRS990/ReceivablesFromOfficersEtcGrp/EOYAmt", line = "Part X Line 5 Column B")]
    pub receivables_from_officers_eoy_amt: Option<i64>,

    /// Loans and receivables from disqualified persons - beginning of year
    #[field(xpath = "/IRS990/RcvblFromDisqualifiedPrsnGrp/BOYAmt", line = "Part X Line 6 Column A")]
    pub receivables_from_disqualified_boy_amt: Option<i64>,

    /// Loans and receivables from disqualified persons - end of year
    #[field(xpath = "/IRS990/RcvblFromDisqualifiedPrsnGrp/EOYAmt", line = "Part X Line 6 Column B")]
    pub receivables_from_disqualified_eoy_amt: Option<i64>,

    /// Other notes and loans receivable, net - beginning of year
    #[field(xpath = "/IRS990/OthNotesLoansReceivableNetGrp/BOYAmt", line = "Part X Line 7 Column A")]
    pub other_notes_receivable_boy_amt: Option<i64>,

    /// Other notes and loans receivable, net - end of year
    #[field(xpath = "/IRS990/OthNotesLoansReceivableNetGrp/EOYAmt", line = "Part X Line 7 Column B")]
    pub other_notes_receivable_eoy_amt: Option<i64>,

    /// Inventories for sale or use - beginning of year
    #[field(xpath = "/IRS990/InventoriesForSaleOrUseGrp/BOYAmt", line = "Part X Line 8 Column A")]
    pub inventories_boy_amt: Option<i64>,

    /// Inventories for sale or use - end of year
    #[field(xpath = "/IRS990/InventoriesForSaleOrUseGrp/EOYAmt", line = "Part X Line 8 Column B")]
    pub inventories_eoy_amt: Option<i64>,

    /// Prepaid expenses and deferred charges - beginning of year
    #[field(xpath = "/IRS990/PrepaidExpensesDefrdChargesGrp/BOYAmt", line = "Part X Line 9 Column A")]
    pub prepaid_expenses_boy_amt: Option<i64>,

    /// Prepaid expenses and deferred charges - end of year
    #[field(xpath = "/IRS990/PrepaidExpensesDefrdChargesGrp/EOYAmt", line = "Part X Line 9 Column B")]
    pub prepaid_expenses_eoy_amt: Option<i64>,

    /// Investments: other securities - beginning of year
    #[field(xpath = "/IRS990/InvestmentsOtherSecuritiesGrp/BOYAmt", line = "Part X Line 12 Column A")]
    pub investments_other_securities_boy_amt: Option<i64>,

    /// Investments: other securities - end of year
    #[field(xpath = "/IRS990/InvestmentsOtherSecuritiesGrp/EOYAmt", line = "Part X Line 12 Column B")]
    pub investments_other_securities_eoy_amt: Option<i64>,

    /// Investments: program-related - beginning of year
    #[field(xpath = "/IRS990/InvestmentsProgramRelatedGrp/BOYAmt", line = "Part X Line 13 Column A")]
    pub investments_program_related_boy_amt: Option<i64>,

    /// Investments: program-related - end of year
    #[field(xpath = "/IRS990/InvestmentsProgramRelatedGrp/EOYAmt", line = "Part X Line 13 Column B")]
    pub investments_program_related_eoy_amt: Option<i64>,

    /// Intangible assets - beginning of year
    #[field(xpath = "/IRS990/IntangibleAssetsGrp/BOYAmt", line = "Part X Line 14 Column A")]
    pub intangible_assets_boy_amt: Option<i64>,

    /// Intangible assets - end of year
    #[field(xpath = "/IRS990/IntangibleAssetsGrp/EOYAmt", line = "Part X Line 14 Column B")]
    pub intangible_assets_eoy_amt: Option<i64>,

    /// Other assets - beginning of year
    #[field(xpath = "/IRS990/OtherAssetsTotalGrp/BOYAmt", line = "Part X Line 15 Column A")]
    pub other_assets_boy_amt: Option<i64>,

    /// Other assets - end of year
    #[field(xpath = "/IRS990/OtherAssetsTotalGrp/EOYAmt", line = "Part X Line 15 Column B")]
    pub other_assets_eoy_amt: Option<i64>,

    /// Grants payable - beginning of year
    #[field(xpath = "/IRS990/GrantsPayableGrp/BOYAmt", line = "Part X Line 18 Column A")]
    pub grants_payable_boy_amt: Option<i64>,

    /// Grants payable - end of year
    #[field(xpath = "/IRS990/GrantsPayableGrp/EOYAmt", line = "Part X Line 18 Column B")]
    pub grants_payable_eoy_amt: Option<i64>,

    /// Deferred revenue - beginning of year
    #[field(xpath = "/IRS990/DeferredRevenueGrp/BOYAmt", line = "Part X Line 19 Column A")]
    pub deferred_revenue_boy_amt: Option<i64>,

    /// Deferred revenue - end of year
    #[field(xpath = "/IRS990/DeferredRevenueGrp/EOYAmt", line = "Part X Line 19 Column B")]
    pub deferred_revenue_eoy_amt: Option<i64>,

    /// Tax-exempt bond liabilities - beginning of year
    #[field(xpath = "/IRS990/TaxExemptBondLiabilitiesGrp/BOYAmt", line = "Part X Line 20 Column A")]
    pub tax_exempt_bond_liabilities_boy_amt: Option<i64>,

    /// Escrow or custodial account liability - beginning of year
    #[field(xpath = "/IRS990/EscrowAccountLiabilityGrp/BOYAmt", line = "Part X Line 21 Column A")]
    pub escrow_account_liability_boy_amt: Option<i64>,

    /// Escrow or custodial account liability - end of year
    #[field(xpath = "/IRS990/EscrowAccountLiabilityGrp/EOYAmt", line = "Part X Line 21 Column B")]
    pub escrow_account_liability_eoy_amt: Option<i64>,

    /// Loans and payables to current and former officers - beginning of year
    #[field(xpath = "/IRS990/LoansFromOfficersDirectorsGrp/BOYAmt", line = "Part X Line 22 Column A")]
    pub loans_from_officers_boy_amt: Option<i64>,

    /// Loans and payables to current and former officers - end of year
    #[field(xpath = "/IRS990/LoansFromOfficersDirectorsGrp/EOYAmt", line = "Part X Line 22 Column B")]
    pub loans_from_officers_eoy_amt: Option<i64>,

    /// Secured mortgages and notes payable - beginning of year
    #[field(xpath = "/IRS990/MortgNotesPyblScrdInvstPropGrp/BOYAmt", line = "Part X Line 23 Column A")]
    pub mortgages_boy_amt: Option<i64>,

    /// Unsecured notes and loans payable - beginning of year
    #[field(xpath = "/IRS990/UnsecuredNotesLoansPayableGrp/BOYAmt", line = "Part X Line 24 Column A")]
    pub unsecured_notes_boy_amt: Option<i64>,

    /// Unsecured notes and loans payable - end of year
    #[field(xpath = "/IRS990/UnsecuredNotesLoansPayableGrp/EOYAmt", line = "Part X Line 24 Column B")]
    pub unsecured_notes_eoy_amt: Option<i64>,

    /// Other liabilities - beginning of year
    #[field(xpath = "/IRS990/OtherLiabilitiesGrp/BOYAmt", line = "Part X Line 25 Column A")]
    pub other_liabilities_boy_amt: Option<i64>,

    /// Other liabilities - end of year
    #[field(xpath = "/IRS990/OtherLiabilitiesGrp/EOYAmt", line = "Part X Line 25 Column B")]
    pub other_liabilities_eoy_amt: Option<i64>,

    /// Net assets without donor restrictions - beginning of year
    #[field(xpath = "/IRS990/NoDonorRestrictionNetAssetsGrp/BOYAmt", line = "Part X Line 27 Column A")]
    pub no_donor_restriction_boy_amt: Option<i64>,

    /// Net assets with donor restrictions - beginning of year
    #[field(xpath = "/IRS990/DonorRestrictionNetAssetsGrp/BOYAmt", line = "Part X Line 28 Column A")]
    pub donor_restriction_boy_amt: Option<i64>,

    /// Unrestricted net assets - beginning of year
    #[field(xpath = "/IRS990/UnrestrictedNetAssetsGrp/BOYAmt", line = "Part X Line 27 Column A")]
    pub unrestricted_net_assets_boy_amt: Option<i64>,

    /// Unrestricted net assets - end of year
    #[field(xpath = "/IRS990/UnrestrictedNetAssetsGrp/EOYAmt", line = "Part X Line 27 Column B")]
    pub unrestricted_net_assets_eoy_amt: Option<i64>,

    /// Temporarily restricted net assets - beginning of year
    #[field(xpath = "/IRS990/TemporarilyRstrNetAssetsGrp/BOYAmt", line = "Part X Line 28 Column A")]
    pub temporarily_restricted_net_assets_boy_amt: Option<i64>,

    /// Temporarily restricted net assets - end of year
    #[field(xpath = "/IRS990/TemporarilyRstrNetAssetsGrp/EOYAmt", line = "Part X Line 28 Column B")]
    pub temporarily_restricted_net_assets_eoy_amt: Option<i64>,

    /// Permanently restricted net assets - beginning of year
    #[field(xpath = "/IRS990/PermanentlyRstrNetAssetsGrp/BOYAmt", line = "Part X Line 29 Column A")]
    pub permanently_restricted_net_assets_boy_amt: Option<i64>,

    /// Permanently restricted net assets - end of year
    #[field(xpath = "/IRS990/PermanentlyRstrNetAssetsGrp/EOYAmt", line = "Part X Line 29 Column B")]
    pub permanently_restricted_net_assets_eoy_amt: Option<i64>,

    /// Organization does not follow FASB ASC 958
    #[field(xpath = "/IRS990/OrgDoesNotFollowFASB117Ind", line = "Part X Line 29 Heading", max_length = 5)]
    pub org_does_not_follow_fasb_117_ind: Option<String>,

    /// Capital stock or trust principal - beginning of year
    #[field(xpath = "/IRS990/CapStkTrPrinCurrentFundsGrp/BOYAmt", line = "Part X Line 30 Column A")]
    pub capital_stock_boy_amt: Option<i64>,

    /// Capital stock or trust principal - end of year
    #[field(xpath = "/IRS990/CapStkTrPrinCurrentFundsGrp/EOYAmt", line = "Part X Line 30 Column B")]
    pub capital_stock_eoy_amt: Option<i64>,

    /// Paid-in or capital surplus - beginning of year
    #[field(xpath = "/IRS990/PdInCapSrplsLandBldgEqpFundGrp/BOYAmt", line = "Part X Line 31 Column A")]
    pub paid_in_capital_boy_amt: Option<i64>,

    /// Paid-in or capital surplus - end of year
    #[field(xpath = "/IRS990/PdInCapSrplsLandBldgEqpFundGrp/EOYAmt", line = "Part X Line 31 Column B")]
    pub paid_in_capital_eoy_amt: Option<i64>,

    /// Retained earnings or endowment - beginning of year
    #[field(xpath = "/IRS990/RtnEarnEndowmentIncmOthFndsGrp/BOYAmt", line = "Part X Line 32 Column A")]
    pub retained_earnings_boy_amt: Option<i64>,

    /// Retained earnings or endowment - end of year
    #[field(xpath = "/IRS990/RtnEarnEndowmentIncmOthFndsGrp/EOYAmt", line = "Part X Line 32 Column B")]
    pub retained_earnings_eoy_amt: Option<i64>,

    /// Total liabilities and net assets - beginning of year
    #[field(xpath = "/IRS990/TotLiabNetAssetsFundBalanceGrp/BOYAmt", line = "Part X Line 34 Column A")]
    pub total_liab_net_assets_boy_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_part_xi", form = "Form990", part = "Part XI", description = "Reconciliation of net assets")]
pub struct PartXI {
    pub object_id: String,
    pub ein: String,

    /// Schedule O contains a response to a question in this part
    #[field(xpath = "/IRS990/InfoInScheduleOPartXIInd", line = "Part XI", max_length = 5)]
    pub info_in_schedule_o_part_xi_ind: Option<String>,

    /// Total revenue less total expenses
    #[field(xpath = "/IRS990/ReconcilationRevenueExpnssAmt", line = "Part XI Line 3")]
    pub reconcilation_revenue_expnss_amt: Option<i64>,

    /// Net unrealized gains or losses on investments
    #[field(xpath = "/IRS990/NetUnrlzdGainsLossesInvstAmt", line = "Part XI Line 5")]
    pub net_unrlzd_gains_losses_invst_amt: Option<i64>,

    /// Donated services and use of facilities
    #[field(xpath = "/IRS990/DonatedServicesAndUseFcltsAmt", line = "Part XI Line 6")]
    pub donated_services_and_use_fclts_amt: Option<i64>,

    /// Investment expenses
    #[field(xpath = "/IRS990/InvestmentExpenseAmt", line = "Part XI Line 7")]
    pub investment_expense_amt: Option<i64>,

    /// Prior period adjustments
    #[field(xpath = "/IRS990/PriorPeriodAdjustmentsAmt", line = "Part XI Line 8")]
    pub prior_period_adjustments_amt: Option<i64>,

    /// Other changes in net assets
    #[field(xpath = "/IRS990/OtherChangesInNetAssetsAmt", line = "Part XI Line 9")]
    pub other_changes_in_net_assets_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_part_xii",
    form = "Form990",
    part = "Part XII",
    description = "Financial statements and reporting"
)]
pub struct PartXII {
    pub object_id: String,
    pub ein: String,

    /// Accounting method: cash
    #[field(xpath = "/IRS990/MethodOfAccountingCashInd", line = "Part XII Line 1", max_length = 5)]
    pub method_of_accounting_cash_ind: Option<String>,

    /// Accounting method: accrual
    #[field(xpath = "/IRS990/MethodOfAccountingAccrualInd", line = "Part XII Line 1", max_length = 5)]
    pub method_of_accounting_accrual_ind: Option<String>,

    /// Accounting method: other
    #[field(xpath = "/IRS990/MethodOfAccountingOtherInd", line = "Part XII Line 1", max_length = 5)]
    pub method_of_accounting_other_ind: Option<String>,

    /// Financial statements compiled or reviewed
    #[field(xpath = "/IRS990/AcctCompileOrReviewInd", line = "Part XII Line 2a", max_length = 5)]
    pub acct_compile_or_review_ind: Option<String>,

    /// Financial statements audited
    #[field(xpath = "/IRS990/FSAuditedInd", line = "Part XII Line 2b", max_length = 5)]
    pub fs_audited_ind: Option<String>,

    /// Audit committee
    #[field(xpath = "/IRS990/AuditCommitteeInd", line = "Part XII Line 2c", max_length = 5)]
    pub audit_committee_ind: Option<String>,

    /// Single audit required
    #[field(xpath = "/IRS990/FederalGrantAuditRequiredInd", line = "Part XII Line 3a", max_length = 5)]
    pub federal_grant_audit_required_ind: Option<String>,

    /// Single audit performed
    #[field(xpath = "/IRS990/FederalGrantAuditPerformedInd", line = "Part XII Line 3b", max_length = 5)]
    pub federal_grant_audit_performed_ind: Option<String>,

    /// Compiled or reviewed on a separate basis
    #[field(
        xpath = "/IRS990/AcctCompileOrReviewBasisGrp/SeparateBasisFinclStmtInd",
        line = "Part XII Line 2a",
        max_length = 5
    )]
    pub compiled_separate_basis_ind: Option<String>,

    /// Compiled or reviewed on a consolidated basis
    #[field(
        xpath = "/IRS990/AcctCompileOrReviewBasisGrp/ConsolidatedBasisFinclStmtInd",
        line = "Part XII Line 2a",
        max_length = 5
    )]
    pub compiled_consolidated_basis_ind: Option<String>,

    /// Compiled or reviewed on both bases
    #[field(
        xpath = "/IRS990/AcctCompileOrReviewBasisGrp/BothConsolAndSepBasisFinclInd",
        line = "Part XII Line 2a",
        max_length = 5
    )]
    pub compiled_both_bases_ind: Option<String>,

    /// Audited on a separate basis
    #[field(
        xpath = "/IRS990/FSAuditedBasisGrp/SeparateBasisFinclStmtInd",
        line = "Part XII Line 2b",
        max_length = 5
    )]
    pub audited_separate_basis_ind: Option<String>,

    /// Audited on a consolidated basis
    #[field(
        xpath = "/IRS990/FSAuditedBasisGrp/ConsolidatedBasisFinclStmtInd",
        line = "Part XII Line 2b",
        max_length = 5
    )]
    pub audited_consolidated_basis_ind: Option<String>,

    /// Audited on both bases
    #[field(
        xpath = "/IRS990/FSAuditedBasisGrp/BothConsolAndSepBasisFinclInd",
        line = "Part XII Line 2b",
        max_length = 5
    )]
    pub audited_both_bases_ind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormTable};

    #[test]
    fn test_part_i_declaration() {
        let table = PartI::definition();
        assert_eq!(table.name(), "return_part_i");
        assert_eq!(table.part(), "Part I");
        let column = table.column("CYTtlRvnAmt").expect("column");
        assert_eq!(column.field_type, FieldType::BigInteger);
        assert_eq!(column.line_number.as_deref(), Some("Part I Line 12"));
        assert_eq!(column.description, "Total revenue - current year");
        assert_eq!(
            column.aliases.to_vec(),
            vec!["/IRS990/TotalRevenueCurrentYear".to_string()]
        );
        assert_eq!(
            table.column("ActvtyOrMssnDsc").map(|column| column.field_type),
            Some(FieldType::LongText)
        );
    }

    #[test]
    fn test_section_a_is_repeating() {
        let table = Form990PartVIISectionA::definition();
        assert!(table.is_repeating());
        assert_eq!(table.parent(), Some("return_part_vii"));
        assert!(table.has_column("PrsnNm"));
        assert!(table.has_column("BsnssNm_BsnssNmLn1Txt"));
        assert_eq!(
            table.column("AvrgHrsPrWkRt").map(|column| column.field_type),
            Some(FieldType::Decimal)
        );
    }

    #[test]
    fn test_typed_record_conversion() {
        let part = PartI {
            object_id: "201843199349309999".to_string(),
            ein: "123456789".to_string(),
            cy_total_revenue_amt: Some(1_500_000),
            total_employee_cnt: Some(12),
            activity_or_mission_desc: Some("Feed people".to_string()),
            ..Default::default()
        };
        let record = part.to_record();
        assert_eq!(record.populated(), 3);
        assert_eq!(PartI::from_record(&record).ok(), Some(part));
    }
}
