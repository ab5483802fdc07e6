//! Form 990-EZ: Short Form Return of Organization Exempt From Income Tax.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        Part0::definition(),
        PartI::definition(),
        PartII::definition(),
        PartIII::definition(),
        ProgramSrvcAccomplishment::definition(),
        PartIV::definition(),
        OfficerDirectorTrusteeEmpl::definition(),
        PartV::definition(),
        PartVI::definition(),
        CompensationHighestPaidEmpl::definition(),
        CompensationOfHghstPdCntrct::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_ez_part_0", form = "Form990EZ", part = "Part 0", description = "Heading")]
pub struct Part0 {
    pub object_id: String,
    pub ein: String,

    /// Accounting method: cash
    #[field(xpath = "/IRS990EZ/MethodOfAccountingCashInd", line = "Heading Line G", max_length = 5)]
    pub method_of_accounting_cash_ind: Option<String>,

    /// Accounting method: accrual
    #[field(xpath = "/IRS990EZ/MethodOfAccountingAccrualInd", line = "Heading Line G", max_length = 5)]
    pub method_of_accounting_accrual_ind: Option<String>,

    /// Schedule B not required
    #[field(xpath = "/IRS990EZ/ScheduleBNotRequiredInd", line = "Heading Line H", max_length = 5)]
    pub schedule_b_not_required_ind: Option<String>,

    /// Website
    #[field(xpath = "/IRS990EZ/WebsiteAddressTxt", line = "Heading Line I", alias = "/IRS990EZ/WebSite")]
    pub website_address_txt: Option<String>,

    /// Tax-exempt status 501(c)(3)
    #[field(xpath = "/IRS990EZ/Organization501c3Ind", line = "Heading Line J", max_length = 5)]
    pub organization_501c3_ind: Option<String>,

    /// Form of organization: corporation
    #[field(xpath = "/IRS990EZ/TypeOfOrganizationCorpInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_corp_ind: Option<String>,

    /// Gross receipts
    #[field(xpath = "/IRS990EZ/GrossReceiptsAmt", line = "Heading Line L", alias = "/IRS990EZ/GrossReceipts")]
    pub gross_receipts_amt: Option<i64>,

    /// Address change
    #[field(xpath = "/IRS990EZ/AddressChangeInd", line = "Heading Line B", max_length = 5)]
    pub address_change_ind: Option<String>,

    /// Name change
    #[field(xpath = "/IRS990EZ/NameChangeInd", line = "Heading Line B", max_length = 5)]
    pub name_change_ind: Option<String>,

    /// Initial return
    #[field(xpath = "/IRS990EZ/InitialReturnInd", line = "Heading Line B", max_length = 5)]
    pub initial_return_ind: Option<String>,

    /// Final return, terminated
    #[field(xpath = "/IRS990EZ/FinalReturnInd", line = "Heading Line B", max_length = 5)]
    pub final_return_ind: Option<String>,

    /// Amended return
    #[field(xpath = "/IRS990EZ/AmendedReturnInd", line = "Heading Line B", max_length = 5)]
    pub amended_return_ind: Option<String>,

    /// Application pending
    #[field(xpath = "/IRS990EZ/ApplicationPendingInd", line = "Heading Line B", max_length = 5)]
    pub application_pending_ind: Option<String>,

    /// Group exemption number
    #[field(xpath = "/IRS990EZ/GroupExemptionNum", line = "Heading Line F", max_length = 4)]
    pub group_exemption_num: Option<String>,

    /// Accounting method: other
    #[field(xpath = "/IRS990EZ/MethodOfAccountingOtherInd", line = "Heading Line G", max_length = 5)]
    pub method_of_accounting_other_ind: Option<String>,

    /// Section 501(c) organization other than 501(c)(3)
    #[field(xpath = "/IRS990EZ/Organization501cInd", line = "Heading Line J", max_length = 5)]
    pub organization_501c_ind: Option<String>,

    /// Section 4947(a)(1) nonexempt charitable trust
    #[field(xpath = "/IRS990EZ/Organization4947a1NotPFInd", line = "Heading Line J", max_length = 5)]
    pub organization_4947a1_not_pf_ind: Option<String>,

    /// Section 527 organization
    #[field(xpath = "/IRS990EZ/Organization527Ind", line = "Heading Line J", max_length = 5)]
    pub organization_527_ind: Option<String>,

    /// Form of organization: trust
    #[field(xpath = "/IRS990EZ/TypeOfOrganizationTrustInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_trust_ind: Option<String>,

    /// Form of organization: association
    #[field(xpath = "/IRS990EZ/TypeOfOrganizationAssocInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_assoc_ind: Option<String>,

    /// Form of organization: other
    #[field(xpath = "/IRS990EZ/TypeOfOrganizationOtherInd", line = "Heading Line K", max_length = 5)]
    pub type_of_organization_other_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_part_i",
    form = "Form990EZ",
    part = "Part I",
    description = "Revenue, expenses and changes in net assets"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Contributions, gifts, grants and similar amounts received
    #[field(xpath = "/IRS990EZ/ContributionsGiftsGrantsEtcAmt", line = "Part I Line 1", alias = "/IRS990EZ/ContributionsGiftsGrantsEtc")]
    pub contributions_gifts_grants_etc_amt: Option<i64>,

    /// Program service revenue including government fees and contracts
    #[field(xpath = "/IRS990EZ/ProgramServiceRevenueAmt", line = "Part I Line 2", alias = "/IRS990EZ/ProgramServiceRevenue")]
    pub program_service_revenue_amt: Option<i64>,

    /// Membership dues and assessments
    #[field(xpath = "/IRS990EZ/MembershipDuesAmt", line = "Part I Line 3", alias = "/IRS990EZ/MembershipDues")]
    pub membership_dues_amt: Option<i64>,

    /// Investment income
    #[field(xpath = "/IRS990EZ/InvestmentIncomeAmt", line = "Part I Line 4", alias = "/IRS990EZ/InvestmentIncome")]
    pub investment_income_amt: Option<i64>,

    /// Gain or loss from sale of assets
    #[field(xpath = "/IRS990EZ/GainOrLossFromSaleOfAssetsAmt", line = "Part I Line 5d")]
    pub gain_or_loss_from_sale_of_assets_amt: Option<i64>,

    /// Gaming and fundraising events, net income
    #[field(xpath = "/IRS990EZ/SpecialEventsNetIncomeLossAmt", line = "Part I Line 6d")]
    pub special_events_net_income_loss_amt: Option<i64>,

    /// Gross profit or loss from sales of inventory
    #[field(xpath = "/IRS990EZ/GrossProfitLossSlsOfInvntryAmt", line = "Part I Line 7c")]
    pub gross_profit_loss_sls_of_invntry_amt: Option<i64>,

    /// Other revenue
    #[field(xpath = "/IRS990EZ/OtherRevenueTotalAmt", line = "Part I Line 8", alias = "/IRS990EZ/OtherRevenueTotal")]
    pub other_revenue_total_amt: Option<i64>,

    /// Total revenue
    #[field(xpath = "/IRS990EZ/TotalRevenueAmt", line = "Part I Line 9", alias = "/IRS990EZ/TotalRevenue")]
    pub total_revenue_amt: Option<i64>,

    /// Grants and similar amounts paid
    #[field(xpath = "/IRS990EZ/GrantsAndSimilarAmountsPaidAmt", line = "Part I Line 10")]
    pub grants_and_similar_amounts_paid_amt: Option<i64>,

    /// Benefits paid to or for members
    #[field(xpath = "/IRS990EZ/BenefitsPaidToOrForMembersAmt", line = "Part I Line 11")]
    pub benefits_paid_to_or_for_members_amt: Option<i64>,

    /// Salaries, other compensation and employee benefits
    #[field(xpath = "/IRS990EZ/SalariesOtherCompEmplBnftAmt", line = "Part I Line 12")]
    pub salaries_other_comp_empl_bnft_amt: Option<i64>,

    /// Professional fees and other payments to independent contractors
    #[field(xpath = "/IRS990EZ/FeesAndOtherPymtToIndCntrctAmt", line = "Part I Line 13")]
    pub fees_and_other_pymt_to_ind_cntrct_amt: Option<i64>,

    /// Occupancy, rent, utilities and maintenance
    #[field(xpath = "/IRS990EZ/OccupancyRentUtltsAndMaintAmt", line = "Part I Line 14")]
    pub occupancy_rent_utlts_and_maint_amt: Option<i64>,

    /// Printing, publications, postage and shipping
    #[field(xpath = "/IRS990EZ/PrintingPublicationsPostageAmt", line = "Part I Line 15")]
    pub printing_publications_postage_amt: Option<i64>,

    /// Other expenses
    #[field(xpath = "/IRS990EZ/OtherExpensesTotalAmt", line = "Part I Line 16")]
    pub other_expenses_total_amt: Option<i64>,

    /// Total expenses
    #[field(xpath = "/IRS990EZ/TotalExpensesAmt", line = "Part I Line 17", alias = "/IRS990EZ/TotalExpenses")]
    pub total_expenses_amt: Option<i64>,

    /// Excess or deficit for the year
    #[field(xpath = "/IRS990EZ/ExcessOrDeficitForYearAmt", line = "Part I Line 18", alias = "/IRS990EZ/ExcessOrDeficitForYear")]
    pub excess_or_deficit_for_year_amt: Option<i64>,

    /// Net assets or fund balances at beginning of year
    #[field(xpath = "/IRS990EZ/NetAssetsOrFundBalancesBOYAmt", line = "Part I Line 19", alias = "/IRS990EZ/NetAssetsOrFundBalancesBOY")]
    pub net_assets_or_fund_balances_boy_amt: Option<i64>,

    /// Other changes in net assets
    #[field(xpath = "/IRS990EZ/OtherChangesInNetAssetsAmt", line = "Part I Line 20")]
    pub other_changes_in_net_assets_amt: Option<i64>,

    /// Net assets or fund balances at end of year
    #[field(xpath = "/IRS990EZ/NetAssetsOrFundBalancesEOYAmt", line = "Part I Line 21", alias = "/IRS990EZ/NetAssetsOrFundBalancesEOY")]
    pub net_assets_or_fund_balances_eoy_amt: Option<i64>,

    /// Schedule O contains a response for Part I
    #[field(xpath = "/IRS990EZ/InfoInScheduleOPartIInd", line = "Heading", max_length = 5)]
    pub info_in_schedule_o_part_i_ind: Option<String>,

    /// Gross amount from sale of assets other than inventory
    #[field(xpath = "/IRS990EZ/SaleOfAssetsGrossAmt", line = "Part I Line 5a")]
    pub sale_of_assets_gross_amt: Option<i64>,

    /// Cost or other basis and sales expenses
    #[field(xpath = "/IRS990EZ/CostOrOtherBasisExpenseSaleAmt", line = "Part I Line 5b")]
    pub cost_or_other_basis_expense_sale_amt: Option<i64>,

    /// Gross income from gaming
    #[field(xpath = "/IRS990EZ/GamingGrossIncomeAmt", line = "Part I Line 6a")]
    pub gaming_gross_income_amt: Option<i64>,

    /// Gross income from fundraising events
    #[field(xpath = "/IRS990EZ/FundraisingGrossIncomeAmt", line = "Part I Line 6b")]
    pub fundraising_gross_income_amt: Option<i64>,

    /// Direct expenses from gaming and fundraising events
    #[field(xpath = "/IRS990EZ/SpecialEventsDirectExpensesAmt", line = "Part I Line 6c")]
    pub special_events_direct_expenses_amt: Option<i64>,

    /// Gross sales of inventory
    #[field(xpath = "/IRS990EZ/GrossSalesOfInventoryAmt", line = "Part I Line 7a")]
    pub gross_sales_of_inventory_amt: Option<i64>,

    /// Cost of goods sold
    #[field(xpath = "/IRS990EZ/CostOfGoodsSoldAmt", line = "Part I Line 7b")]
    pub cost_of_goods_sold_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_ez_part_ii", form = "Form990EZ", part = "Part II", description = "Balance sheets")]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Cash, savings and investments - BOY
    #[field(xpath = "/IRS990EZ/CashSavingsAndInvestmentsGrp/BOYAmt", line = "Part II Line 22 Column A")]
    pub cash_savings_and_investments_boy_amt: Option<i64>,

    /// Cash, savings and investments - EOY
    #[field(xpath = "/IRS990EZ/CashSavingsAndInvestmentsGrp/EOYAmt", line = "Part II Line 22 Column B")]
    pub cash_savings_and_investments_eoy_amt: Option<i64>,

    /// Land and buildings - BOY
    #[field(xpath = "/IRS990EZ/LandAndBuildingsGrp/BOYAmt", line = "Part II Line 23 Column A")]
    pub land_and_buildings_boy_amt: Option<i64>,

    /// Land and buildings - EOY
    #[field(xpath = "/IRS990EZ/LandAndBuildingsGrp/EOYAmt", line = "Part II Line 23 Column B")]
    pub land_and_buildings_eoy_amt: Option<i64>,

    /// Other assets - BOY
    #[field(xpath = "/IRS990EZ/OtherAssetsTotalDetail/BOYAmt", line = "Part II Line 24 Column A")]
    pub other_assets_boy_amt: Option<i64>,

    /// Other assets - EOY
    #[field(xpath = "/IRS990EZ/OtherAssetsTotalDetail/EOYAmt", line = "Part II Line 24 Column B")]
    pub other_assets_eoy_amt: Option<i64>,

    /// Total assets - BOY
    #[field(xpath = "/IRS990EZ/Form990TotalAssetsGrp/BOYAmt", line = "Part II Line 25 Column A")]
    pub total_assets_boy_amt: Option<i64>,

    /// Total assets - EOY
    #[field(xpath = "/IRS990EZ/Form990TotalAssetsGrp/EOYAmt", line = "Part II Line 25 Column B")]
    pub total_assets_eoy_amt: Option<i64>,

    /// Total liabilities - BOY
    #[field(xpath = "/IRS990EZ/SumOfTotalLiabilitiesGrp/BOYAmt", line = "Part II Line 26 Column A")]
    pub total_liabilities_boy_amt: Option<i64>,

    /// Total liabilities - EOY
    #[field(xpath = "/IRS990EZ/SumOfTotalLiabilitiesGrp/EOYAmt", line = "Part II Line 26 Column B")]
    pub total_liabilities_eoy_amt: Option<i64>,

    /// Net assets or fund balances - BOY
    #[field(xpath = "/IRS990EZ/NetAssetsOrFundBalancesGrp/BOYAmt", line = "Part II Line 27 Column A")]
    pub net_assets_boy_amt: Option<i64>,

    /// Net assets or fund balances - EOY
    #[field(xpath = "/IRS990EZ/NetAssetsOrFundBalancesGrp/EOYAmt", line = "Part II Line 27 Column B")]
    pub net_assets_eoy_amt: Option<i64>,

    /// Schedule O contains a response for Part II
    #[field(xpath = "/IRS990EZ/InfoInScheduleOPartIIInd", line = "Heading", max_length = 5)]
    pub info_in_schedule_o_part_ii_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_part_iii",
    form = "Form990EZ",
    part = "Part III",
    description = "Statement of program service accomplishments"
)]
pub struct PartIII {
    pub object_id: String,
    pub ein: String,

    /// Primary exempt purpose
    #[field(xpath = "/IRS990EZ/PrimaryExemptPurposeTxt", line = "Part III", long, alias = "/IRS990EZ/PrimaryExemptPurpose")]
    pub primary_exempt_purpose_txt: Option<String>,

    /// Total program service expenses
    #[field(xpath = "/IRS990EZ/TotalProgramServiceExpensesAmt", line = "Part III Line 32")]
    pub total_program_service_expenses_amt: Option<i64>,

    /// Schedule O contains a response for Part III
    #[field(xpath = "/IRS990EZ/InfoInScheduleOPartIIIInd", line = "Heading", max_length = 5)]
    pub info_in_schedule_o_part_iii_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_prgrmsrvcaccmplshmnt",
    form = "Form990EZ",
    part = "Part III",
    description = "Program service accomplishments",
    group = "/IRS990EZ/ProgramSrvcAccomplishmentGrp",
    parent = "return_ez_part_iii"
)]
pub struct ProgramSrvcAccomplishment {
    pub object_id: String,
    pub ein: String,

    /// Description of accomplishments
    #[field(xpath = "/IRS990EZ/ProgramSrvcAccomplishmentGrp/DescriptionProgramSrvcAccomTxt", line = "Part III Line 28", long)]
    pub description_program_srvc_accom_txt: Option<String>,

    /// Grants and allocations
    #[field(xpath = "/IRS990EZ/ProgramSrvcAccomplishmentGrp/GrantsAndAllocationsAmt", line = "Part III Line 28")]
    pub grants_and_allocations_amt: Option<i64>,

    /// Foreign grants included
    #[field(xpath = "/IRS990EZ/ProgramSrvcAccomplishmentGrp/ForeignGrantsInd", line = "Part III Line 28", max_length = 5)]
    pub foreign_grants_ind: Option<String>,

    /// Program service expenses
    #[field(xpath = "/IRS990EZ/ProgramSrvcAccomplishmentGrp/ProgramServiceExpensesAmt", line = "Part III Line 28")]
    pub program_service_expenses_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_part_iv",
    form = "Form990EZ",
    part = "Part IV",
    description = "List of officers, directors, trustees and key employees"
)]
pub struct PartIV {
    pub object_id: String,
    pub ein: String,

    /// Schedule O contains a response to a question in this part
    #[field(xpath = "/IRS990EZ/InfoInScheduleOPartIVInd", line = "Part IV", max_length = 5)]
    pub info_in_schedule_o_part_iv_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_offcrdrctrtrstempl",
    form = "Form990EZ",
    part = "Part IV",
    description = "Officers, directors, trustees and key employees",
    group = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp",
    parent = "return_ez_part_iv"
)]
pub struct OfficerDirectorTrusteeEmpl {
    pub object_id: String,
    pub ein: String,

    /// Name of person
    #[field(xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/PersonNm", line = "Part IV Column A")]
    pub person_nm: Option<String>,

    /// Name of business
    #[field(xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/BusinessName/BusinessNameLine1Txt", line = "Part IV Column A")]
    pub business_name_line1_txt: Option<String>,

    /// Title
    #[field(xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/TitleTxt", line = "Part IV Column A")]
    pub title_txt: Option<String>,

    /// Average hours per week devoted to position
    #[field(xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/AverageHrsPerWkDevotedToPosRt", line = "Part IV Column B")]
    pub average_hrs_per_wk_devoted_to_pos_rt: Option<f64>,

    /// Reportable compensation
    #[field(xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/CompensationAmt", line = "Part IV Column C")]
    pub compensation_amt: Option<i64>,

    /// Health benefits and deferred compensation
    #[field(xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/EmployeeBenefitProgramAmt", line = "Part IV Column D")]
    pub employee_benefit_program_amt: Option<i64>,

    /// Estimated amount of other compensation
    #[field(xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/ExpenseAccountOtherAllwncAmt", line = "Part IV Column E")]
    pub expense_account_other_allwnc_amt: Option<i64>,

    /// Name of business, second line
    #[field(
        xpath = "/IRS990EZ/OfficerDirectorTrusteeEmplGrp/BusinessName/BusinessNameLine2Txt",
        line = "Part IV Line 29 Column A"
    )]
    pub business_name_line_2_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_ez_part_v", form = "Form990EZ", part = "Part V", description = "Other information")]
pub struct PartV {
    pub object_id: String,
    pub ein: String,

    /// Activities not previously reported to the IRS
    #[field(xpath = "/IRS990EZ/ActivitiesNotPreviouslyRptInd", line = "Part V Line 33", max_length = 5)]
    pub activities_not_previously_rpt_ind: Option<String>,

    /// Changes to governing documents not reported
    #[field(xpath = "/IRS990EZ/ChgMadeToOrgnzngDocNotRptInd", line = "Part V Line 34", max_length = 5)]
    pub chg_made_to_orgnzng_doc_not_rpt_ind: Option<String>,

    /// Unrelated business gross income of $1,000 or more
    #[field(xpath = "/IRS990EZ/OrganizationHadUBIInd", line = "Part V Line 35a", max_length = 5)]
    pub organization_had_ubi_ind: Option<String>,

    /// Liquidation, dissolution, termination or significant disposition
    #[field(xpath = "/IRS990EZ/OrganizationDissolvedEtcInd", line = "Part V Line 36", max_length = 5)]
    pub organization_dissolved_etc_ind: Option<String>,

    /// Direct or indirect political expenditures
    #[field(xpath = "/IRS990EZ/DirectIndirectPltclExpendAmt", line = "Part V Line 37a")]
    pub direct_indirect_pltcl_expend_amt: Option<i64>,

    /// Loans to or from officers
    #[field(xpath = "/IRS990EZ/LoansToFromOfficersInd", line = "Part V Line 38a", max_length = 5)]
    pub loans_to_from_officers_ind: Option<String>,

    /// States where a copy of this return is filed
    #[field(xpath = "/IRS990EZ/StatesWhereCopyOfReturnIsFldCd", line = "Part V Line 43", max_length = 2)]
    pub states_where_copy_of_return_is_fld_cd: Option<String>,

    /// Person who possesses the books and records
    #[field(xpath = "/IRS990EZ/BooksInCareOfDetail/PersonNm", line = "Part V Line 42a")]
    pub books_in_care_of_person_nm: Option<String>,

    /// Books in care of: phone
    #[field(xpath = "/IRS990EZ/BooksInCareOfDetail/PhoneNum", line = "Part V Line 42a", max_length = 20)]
    pub books_in_care_of_phone_num: Option<String>,

    /// Donor advised funds
    #[field(xpath = "/IRS990EZ/DonorAdvisedFundsInd", line = "Part V Line 44a", max_length = 5)]
    pub donor_advised_funds_ind: Option<String>,

    /// Controlled entity within the meaning of section 512(b)(13)
    #[field(xpath = "/IRS990EZ/RelatedOrganizationCtrlEntInd", line = "Part V Line 45a", max_length = 5)]
    pub related_organization_ctrl_ent_ind: Option<String>,

    /// Political campaign activities
    #[field(xpath = "/IRS990EZ/PoliticalCampaignActyInd", line = "Part V Line 46", max_length = 5)]
    pub political_campaign_acty_ind: Option<String>,

    /// Filed Form 990-T
    #[field(xpath = "/IRS990EZ/Form990TFiledInd", line = "Part V Line 35b", max_length = 5)]
    pub form_990_t_filed_ind: Option<String>,

    /// Subject to section 6033(e) notice, reporting and proxy tax
    #[field(xpath = "/IRS990EZ/SubjectToProxyTaxInd", line = "Part V Line 35c", max_length = 5)]
    pub subject_to_proxy_tax_ind: Option<String>,

    /// Filed Form 1120-POL
    #[field(xpath = "/IRS990EZ/Form1120POLFiledInd", line = "Part V Line 37b", max_length = 5)]
    pub form_1120_pol_filed_ind: Option<String>,

    /// Amount of loans to or from officers
    #[field(xpath = "/IRS990EZ/LoansToFromOfficersAmt", line = "Part V Line 38b")]
    pub loans_to_from_officers_amt: Option<i64>,

    /// Initiation fees and capital contributions
    #[field(xpath = "/IRS990EZ/InitiationFeesAndCapContriAmt", line = "Part V Line 39a")]
    pub initiation_fees_and_cap_contri_amt: Option<i64>,

    /// Gross receipts for public use of club facilities
    #[field(xpath = "/IRS990EZ/GrossReceiptsForPublicUseAmt", line = "Part V Line 39b")]
    pub gross_receipts_for_public_use_amt: Option<i64>,

    /// Section 4911 tax
    #[field(xpath = "/IRS990EZ/Section4911TaxAmt", line = "Part V Line 40a")]
    pub section_4911_tax_amt: Option<i64>,

    /// Section 4912 tax
    #[field(xpath = "/IRS990EZ/Section4912TaxAmt", line = "Part V Line 40a")]
    pub section_4912_tax_amt: Option<i64>,

    /// Section 4955 tax
    #[field(xpath = "/IRS990EZ/Section4955TaxAmt", line = "Part V Line 40a")]
    pub section_4955_tax_amt: Option<i64>,

    /// Engaged in an excess benefit transaction
    #[field(xpath = "/IRS990EZ/EngagedInExcessBenefitTransInd", line = "Part V Line 40b", max_length = 5)]
    pub engaged_in_excess_benefit_trans_ind: Option<String>,

    /// Section 4912, 4955 and 4958 taxes imposed on managers or disqualified persons
    #[field(xpath = "/IRS990EZ/TaxImposedAmt", line = "Part V Line 40c")]
    pub tax_imposed_amt: Option<i64>,

    /// Taxes reimbursed by the organization
    #[field(xpath = "/IRS990EZ/TaxReimbursedByOrganizationAmt", line = "Part V Line 40d")]
    pub tax_reimbursed_by_organization_amt: Option<i64>,

    /// Party to a prohibited tax shelter transaction
    #[field(xpath = "/IRS990EZ/ProhibitedTaxShelterTransInd", line = "Part V Line 40e", max_length = 5)]
    pub prohibited_tax_shelter_trans_ind: Option<String>,

    /// Address of the person with the books
    #[field(xpath = "/IRS990EZ/BooksInCareOfDetail/USAddress/AddressLine1Txt", line = "Part V Line 42a")]
    pub books_in_care_of_address_line1_txt: Option<String>,

    /// City of the person with the books
    #[field(
        xpath = "/IRS990EZ/BooksInCareOfDetail/USAddress/CityNm",
        line = "Part V Line 42a",
        max_length = 22
    )]
    pub books_in_care_of_city_nm: Option<String>,

    /// State of the person with the books
    #[field(
        xpath = "/IRS990EZ/BooksInCareOfDetail/USAddress/StateAbbreviationCd",
        line = "Part V Line 42a",
        max_length = 2
    )]
    pub books_in_care_of_state_cd: Option<String>,

    /// ZIP code of the person with the books
    #[field(
        xpath = "/IRS990EZ/BooksInCareOfDetail/USAddress/ZIPCd",
        line = "Part V Line 42a",
        max_length = 10
    )]
    pub books_in_care_of_zip_cd: Option<String>,

    /// Interest in or authority over a foreign financial account
    #[field(xpath = "/IRS990EZ/ForeignFinancialAccountInd", line = "Part V Line 42b", max_length = 5)]
    pub foreign_financial_account_ind: Option<String>,

    /// Office in a foreign country
    #[field(xpath = "/IRS990EZ/ForeignOfficeInd", line = "Part V Line 42c", max_length = 5)]
    pub foreign_office_ind: Option<String>,

    /// Foreign country of the office
    #[field(xpath = "/IRS990EZ/ForeignCountryCd", line = "Part V Line 42c")]
    pub foreign_country_cd: Option<String>,

    /// Section 4947(a)(1) trust filing in lieu of Form 1041
    #[field(xpath = "/IRS990EZ/Filed1041Ind", line = "Part V Line 43", max_length = 5)]
    pub filed_1041_ind: Option<String>,

    /// Tax-exempt interest received or accrued
    #[field(xpath = "/IRS990EZ/TaxExemptInterestAmt", line = "Part V Line 43")]
    pub tax_exempt_interest_amt: Option<i64>,

    /// Operated one or more hospital facilities
    #[field(xpath = "/IRS990EZ/OperateHospitalInd", line = "Part V Line 44b", max_length = 5)]
    pub operate_hospital_ind: Option<String>,

    /// Received payments for indoor tanning services
    #[field(xpath = "/IRS990EZ/IndoorTanningServicesInd", line = "Part V Line 44c", max_length = 5)]
    pub indoor_tanning_services_ind: Option<String>,

    /// Filed Form 720 for indoor tanning services
    #[field(xpath = "/IRS990EZ/Form720FiledInd", line = "Part V Line 44d", max_length = 5)]
    pub form_720_filed_ind: Option<String>,

    /// Receipt or transfer with a controlled entity
    #[field(xpath = "/IRS990EZ/TransactionWithControlEntInd", line = "Part V Line 45b", max_length = 5)]
    pub transaction_with_control_ent_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_part_vi",
    form = "Form990EZ",
    part = "Part VI",
    description = "Section 501(c)(3) organizations only"
)]
pub struct PartVI {
    pub object_id: String,
    pub ein: String,

    /// Engaged in lobbying activities
    #[field(xpath = "/IRS990EZ/LobbyingActivitiesInd", line = "Part VI Line 47", max_length = 5)]
    pub lobbying_activities_ind: Option<String>,

    /// Is a school
    #[field(xpath = "/IRS990EZ/SchoolOperatingInd", line = "Part VI Line 48", max_length = 5)]
    pub school_operating_ind: Option<String>,

    /// Transfers to an exempt non-charitable related organization
    #[field(xpath = "/IRS990EZ/TrnsfrExmptNonChrtblRltdOrgInd", line = "Part VI Line 49a", max_length = 5)]
    pub trnsfr_exmpt_non_chrtbl_rltd_org_ind: Option<String>,

    /// Related organization is a section 527 organization
    #[field(xpath = "/IRS990EZ/RelatedOrgSect527OrgInd", line = "Part VI Line 49b", max_length = 5)]
    pub related_org_sect_527_org_ind: Option<String>,

    /// None entered for highest paid employees
    #[field(xpath = "/IRS990EZ/CompOfHghstPdEmplOrNONETxt", line = "Part VI Line 50", max_length = 4)]
    pub comp_of_hghst_pd_empl_or_none_txt: Option<String>,

    /// Number of other employees paid over $100,000
    #[field(xpath = "/IRS990EZ/OtherEmployeePaidOver50kCnt", line = "Part VI Line 50f")]
    pub other_employee_paid_over_50k_cnt: Option<i32>,

    /// None entered for highest paid contractors
    #[field(xpath = "/IRS990EZ/CompOfHghstPdCntrctOrNONETxt", line = "Part VI Line 51", max_length = 4)]
    pub comp_of_hghst_pd_cntrct_or_none_txt: Option<String>,

    /// Number of other independent contractors paid over $100,000
    #[field(xpath = "/IRS990EZ/ContractorPaidOver50kCnt", line = "Part VI Line 51d")]
    pub contractor_paid_over_50k_cnt: Option<i32>,

    /// Schedule A completed
    #[field(xpath = "/IRS990EZ/Form990ScheduleACompletedInd", line = "Part VI Line 52", max_length = 5)]
    pub form_990_schedule_a_completed_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_cmpnstnhghstpdempl",
    form = "Form990EZ",
    part = "Part VI",
    description = "Compensation of five highest-paid employees",
    group = "/IRS990EZ/CompensationHighestPaidEmplGrp",
    parent = "return_ez_part_vi"
)]
pub struct CompensationHighestPaidEmpl {
    pub object_id: String,
    pub ein: String,

    /// Name of employee
    #[field(xpath = "/IRS990EZ/CompensationHighestPaidEmplGrp/PersonNm", line = "Part VI Line 50 Column A")]
    pub person_nm: Option<String>,

    /// Title
    #[field(xpath = "/IRS990EZ/CompensationHighestPaidEmplGrp/TitleTxt", line = "Part VI Line 50 Column B")]
    pub title_txt: Option<String>,

    /// Average hours per week devoted to position
    #[field(
        xpath = "/IRS990EZ/CompensationHighestPaidEmplGrp/AverageHrsPerWkDevotedToPosRt",
        line = "Part VI Line 50 Column B"
    )]
    pub average_hrs_per_wk_devoted_to_pos_rt: Option<f64>,

    /// Compensation
    #[field(
        xpath = "/IRS990EZ/CompensationHighestPaidEmplGrp/CompensationAmt",
        line = "Part VI Line 50 Column C"
    )]
    pub compensation_amt: Option<i64>,

    /// Contributions to employee benefit plans
    #[field(
        xpath = "/IRS990EZ/CompensationHighestPaidEmplGrp/EmployeeBenefitsAmt",
        line = "Part VI Line 50 Column D"
    )]
    pub employee_benefits_amt: Option<i64>,

    /// Expense account and other allowances
    #[field(
        xpath = "/IRS990EZ/CompensationHighestPaidEmplGrp/ExpenseAccountAmt",
        line = "Part VI Line 50 Column E"
    )]
    pub expense_account_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_ez_cmpnstnofhghstpdcntrct",
    form = "Form990EZ",
    part = "Part VI",
    description = "Five highest-paid independent contractors",
    group = "/IRS990EZ/CompensationOfHghstPdCntrctGrp",
    parent = "return_ez_part_vi"
)]
pub struct CompensationOfHghstPdCntrct {
    pub object_id: String,
    pub ein: String,

    /// Name of contractor (person)
    #[field(xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/PersonNm", line = "Part VI Line 51 Column A")]
    pub person_nm: Option<String>,

    /// Name of contractor (business)
    #[field(
        xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part VI Line 51 Column A"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Address of contractor
    #[field(
        xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/USAddress/AddressLine1Txt",
        line = "Part VI Line 51 Column A"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/USAddress/CityNm",
        line = "Part VI Line 51 Column A",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/USAddress/StateAbbreviationCd",
        line = "Part VI Line 51 Column A",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/USAddress/ZIPCd",
        line = "Part VI Line 51 Column A",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Type of service
    #[field(
        xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/ServiceTypeTxt",
        line = "Part VI Line 51 Column B"
    )]
    pub service_type_txt: Option<String>,

    /// Compensation
    #[field(
        xpath = "/IRS990EZ/CompensationOfHghstPdCntrctGrp/CompensationAmt",
        line = "Part VI Line 51 Column C"
    )]
    pub compensation_amt: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormTable};

    #[test]
    fn test_officer_group_names() {
        let table = OfficerDirectorTrusteeEmpl::definition();
        assert_eq!(table.name(), "return_ez_offcrdrctrtrstempl");
        assert_eq!(table.anchor(), "/IRS990EZ/OfficerDirectorTrusteeEmplGrp");
        assert!(table.has_column("CmpnstnAmt"));
        assert_eq!(
            table.column("AvrgHrsPrWkDvtdTPsRt").map(|column| column.field_type),
            Some(FieldType::Decimal)
        );
    }

    #[test]
    fn test_balance_sheet_group_prefixes() {
        let table = PartII::definition();
        assert!(table.has_column("CshSvngsAndInvstmnts_BOYAmt"));
        assert!(table.has_column("Frm990TtlAssts_EOYAmt"));
        assert!(table.has_column("OthrAsstsTtlDtl_EOYAmt"));
    }
}
