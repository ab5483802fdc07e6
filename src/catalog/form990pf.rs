//! Form 990-PF: Return of Private Foundation.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        Part0::definition(),
        PartI::definition(),
        PartII::definition(),
        PartIII::definition(),
        PartIV::definition(),
        CapGainsLossesTxInvstIncmDetail::definition(),
        PartVI::definition(),
        PartVIIA::definition(),
        PartVIIB::definition(),
        PartVIII::definition(),
        OfficerDirTrstKeyEmpl::definition(),
        CompensationHighestPaidEmpl::definition(),
        CompensationOfHghstPdCntrct::definition(),
        PartIXA::definition(),
        PartIXB::definition(),
        PartX::definition(),
        PartXI::definition(),
        PartXII::definition(),
        PartXIII::definition(),
        PartXIV::definition(),
        PartXV::definition(),
        GrantOrContributionPdDurYr::definition(),
        ApplicationSubmissionInfo::definition(),
        GrantOrContriApprvForFut::definition(),
        PartXVIA::definition(),
        ProgramServiceRevenue::definition(),
        OtherRevenueDescribed::definition(),
        RelationshipSchExemptPurpose::definition(),
        PartXVII::definition(),
        TransfersTransactionsDetail::definition(),
        RelatedExemptOrg::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_pf_part_0", form = "Form990PF", part = "Part 0", description = "Heading")]
pub struct Part0 {
    pub object_id: String,
    pub ein: String,

    /// Foundation status terminated under 507(b)(1)(A)
    #[field(xpath = "/IRS990PF/PFStatusTermSect507b1AInd", line = "Heading Line E", max_length = 5)]
    pub pf_status_term_sect_507b1a_ind: Option<String>,

    /// Section 501(c)(3) exempt private foundation
    #[field(xpath = "/IRS990PF/Organization501c3ExemptPFInd", line = "Heading Line H", max_length = 5)]
    pub organization_501c3_exempt_pf_ind: Option<String>,

    /// Fair market value of all assets at end of year
    #[field(xpath = "/IRS990PF/FMVAssetsEOYAmt", line = "Heading Line I", alias = "/IRS990PF/FMVAssetsEOY")]
    pub fmv_assets_eoy_amt: Option<i64>,

    /// Accounting method: cash
    #[field(xpath = "/IRS990PF/MethodOfAccountingCashInd", line = "Heading Line J", max_length = 5)]
    pub method_of_accounting_cash_ind: Option<String>,

    /// Accounting method: accrual
    #[field(xpath = "/IRS990PF/MethodOfAccountingAccrualInd", line = "Heading Line J", max_length = 5)]
    pub method_of_accounting_accrual_ind: Option<String>,

    /// Initial return
    #[field(xpath = "/IRS990PF/InitialReturnInd", line = "Heading Line G", max_length = 5)]
    pub initial_return_ind: Option<String>,

    /// Initial return of a former public charity
    #[field(xpath = "/IRS990PF/InitialReturnFormerPubChrtyInd", line = "Heading Line G", max_length = 5)]
    pub initial_return_former_pub_chrty_ind: Option<String>,

    /// Final return
    #[field(xpath = "/IRS990PF/FinalReturnInd", line = "Heading Line G", max_length = 5)]
    pub final_return_ind: Option<String>,

    /// Amended return
    #[field(xpath = "/IRS990PF/AmendedReturnInd", line = "Heading Line G", max_length = 5)]
    pub amended_return_ind: Option<String>,

    /// Address change
    #[field(xpath = "/IRS990PF/AddressChangeInd", line = "Heading Line G", max_length = 5)]
    pub address_change_ind: Option<String>,

    /// Name change
    #[field(xpath = "/IRS990PF/NameChangeInd", line = "Heading Line G", max_length = 5)]
    pub name_change_ind: Option<String>,

    /// Exemption application pending
    #[field(xpath = "/IRS990PF/ApplicationPendingInd", line = "Heading Line C", max_length = 5)]
    pub application_pending_ind: Option<String>,

    /// Foreign organization
    #[field(xpath = "/IRS990PF/ForeignOrganizationInd", line = "Heading Line D1", max_length = 5)]
    pub foreign_organization_ind: Option<String>,

    /// Foreign organization meeting the 85% test
    #[field(xpath = "/IRS990PF/Foreign85PctTestInd", line = "Heading Line D2", max_length = 5)]
    pub foreign_85_pct_test_ind: Option<String>,

    /// Section 4947(a)(1) nonexempt charitable trust
    #[field(xpath = "/IRS990PF/Organization4947a1TrtdPFInd", line = "Heading Line H", max_length = 5)]
    pub organization_4947a1_trtd_pf_ind: Option<String>,

    /// Other taxable private foundation
    #[field(xpath = "/IRS990PF/OtherTaxablePrivateFoundationInd", line = "Heading Line H", max_length = 5)]
    pub other_taxable_private_foundation_ind: Option<String>,

    /// Accounting method: other
    #[field(xpath = "/IRS990PF/MethodOfAccountingOtherInd", line = "Heading Line J", max_length = 5)]
    pub method_of_accounting_other_ind: Option<String>,

    /// Foundation in a 60-month termination under 507(b)(1)(B)
    #[field(xpath = "/IRS990PF/PFUnder60MonthTerminationInd", line = "Heading Line F", max_length = 5)]
    pub pf_under_60_month_termination_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_i",
    form = "Form990PF",
    part = "Part I",
    description = "Analysis of revenue and expenses"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Contributions, gifts, grants received - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/ContriRcvdRevAndExpnssAmt", line = "Part I Line 1 Column A")]
    pub contri_rcvd_rev_and_expnss_amt: Option<i64>,

    /// Interest on savings - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/InterestOnSavRevAndExpnssAmt", line = "Part I Line 3 Column A")]
    pub interest_on_sav_rev_and_expnss_amt: Option<i64>,

    /// Dividends and interest from securities - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/DividendsRevAndExpnssAmt", line = "Part I Line 4 Column A")]
    pub dividends_rev_and_expnss_amt: Option<i64>,

    /// Dividends and interest from securities - net investment income
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/DividendsNetInvstIncmAmt", line = "Part I Line 4 Column B")]
    pub dividends_net_invst_incm_amt: Option<i64>,

    /// Net gain from sale of assets - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/NetGainSaleAstRevAndExpnssAmt", line = "Part I Line 6a Column A")]
    pub net_gain_sale_ast_rev_and_expnss_amt: Option<i64>,

    /// Total revenue - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotalRevAndExpnssAmt", line = "Part I Line 12 Column A")]
    pub total_rev_and_expnss_amt: Option<i64>,

    /// Total revenue - net investment income
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotalNetInvstIncmAmt", line = "Part I Line 12 Column B")]
    pub total_net_invst_incm_amt: Option<i64>,

    /// Compensation of officers - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/CompOfcrDirTrstRevAndExpnssAmt", line = "Part I Line 13 Column A")]
    pub comp_ofcr_dir_trst_rev_and_expnss_amt: Option<i64>,

    /// Total operating and administrative expenses - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotOprExpensesRevAndExpnssAmt", line = "Part I Line 24 Column A")]
    pub tot_opr_expenses_rev_and_expnss_amt: Option<i64>,

    /// Contributions, gifts, grants paid - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/ContriPaidRevAndExpnssAmt", line = "Part I Line 25 Column A")]
    pub contri_paid_rev_and_expnss_amt: Option<i64>,

    /// Contributions, gifts, grants paid - disbursements for charitable purposes
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/ContriPaidDsbrsChrtblAmt", line = "Part I Line 25 Column D")]
    pub contri_paid_dsbrs_chrtbl_amt: Option<i64>,

    /// Total expenses and disbursements - revenue and expenses per books
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotalExpensesRevAndExpnssAmt", line = "Part I Line 26 Column A")]
    pub total_expenses_rev_and_expnss_amt: Option<i64>,

    /// Total expenses and disbursements - disbursements for charitable purposes
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotalExpensesDsbrsChrtblAmt", line = "Part I Line 26 Column D")]
    pub total_expenses_dsbrs_chrtbl_amt: Option<i64>,

    /// Excess of revenue over expenses and disbursements
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/ExcessRevenueOverExpensesAmt", line = "Part I Line 27a")]
    pub excess_revenue_over_expenses_amt: Option<i64>,

    /// Net investment income
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/NetInvestmentIncomeAmt", line = "Part I Line 27b")]
    pub net_investment_income_amt: Option<i64>,

    /// Schedule B not required
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/SchBNotRequiredInd",
        line = "Part I Line 2",
        max_length = 5
    )]
    pub sch_b_not_required_ind: Option<String>,

    /// Interest on savings and temporary cash investments - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/InterestOnSavNetInvstIncmAmt",
        line = "Part I Line 3 Column B"
    )]
    pub interest_on_sav_net_invst_incm_amt: Option<i64>,

    /// Interest on savings and temporary cash investments - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/InterestOnSavAdjNetIncmAmt",
        line = "Part I Line 3 Column C"
    )]
    pub interest_on_sav_adj_net_incm_amt: Option<i64>,

    /// Dividends and interest from securities - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/DividendsAdjNetIncmAmt",
        line = "Part I Line 4 Column C"
    )]
    pub dividends_adj_net_incm_amt: Option<i64>,

    /// Gross rents - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/GrossRentsRevAndExpnssAmt",
        line = "Part I Line 5a Column A"
    )]
    pub gross_rents_rev_and_expnss_amt: Option<i64>,

    /// Gross rents - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/GrossRentsNetInvstIncmAmt",
        line = "Part I Line 5a Column B"
    )]
    pub gross_rents_net_invst_incm_amt: Option<i64>,

    /// Gross rents - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/GrossRentsAdjNetIncmAmt",
        line = "Part I Line 5a Column C"
    )]
    pub gross_rents_adj_net_incm_amt: Option<i64>,

    /// Net rental income or loss
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/NetRentalIncomeOrLossAmt",
        line = "Part I Line 5b"
    )]
    pub net_rental_income_or_loss_amt: Option<i64>,

    /// Gross sales price for all assets
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/GrossSalesPriceAmt", line = "Part I Line 6b")]
    pub gross_sales_price_amt: Option<i64>,

    /// Capital gain net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/CapitalGainNetIncmNetInvstAmt",
        line = "Part I Line 7 Column B"
    )]
    pub capital_gain_net_incm_net_invst_amt: Option<i64>,

    /// Net short-term capital gain
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/NetSTCapitalGainAdjNetIncmAmt",
        line = "Part I Line 8 Column C"
    )]
    pub net_st_capital_gain_adj_net_incm_amt: Option<i64>,

    /// Income modifications
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/IncomeModificationsAdjNetIncmAmt",
        line = "Part I Line 9 Column C"
    )]
    pub income_modifications_adj_net_incm_amt: Option<i64>,

    /// Gross sales less returns and allowances
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/GrossSalesLessRetAndAllwncAmt",
        line = "Part I Line 10a"
    )]
    pub gross_sales_less_ret_and_allwnc_amt: Option<i64>,

    /// Cost of goods sold
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/CostOfGoodsSoldAmt", line = "Part I Line 10b")]
    pub cost_of_goods_sold_amt: Option<i64>,

    /// Gross profit or loss - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/GrossProfitRevAndExpnssAmt",
        line = "Part I Line 10c Column A"
    )]
    pub gross_profit_rev_and_expnss_amt: Option<i64>,

    /// Gross profit or loss - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/GrossProfitAdjNetIncmAmt",
        line = "Part I Line 10c Column C"
    )]
    pub gross_profit_adj_net_incm_amt: Option<i64>,

    /// Other income - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherIncomeRevAndExpnssAmt",
        line = "Part I Line 11 Column A"
    )]
    pub other_income_rev_and_expnss_amt: Option<i64>,

    /// Other income - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherIncomeNetInvstIncmAmt",
        line = "Part I Line 11 Column B"
    )]
    pub other_income_net_invst_incm_amt: Option<i64>,

    /// Other income - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherIncomeAdjNetIncmAmt",
        line = "Part I Line 11 Column C"
    )]
    pub other_income_adj_net_incm_amt: Option<i64>,

    /// Total revenue - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotalAdjNetIncmAmt",
        line = "Part I Line 12 Column C"
    )]
    pub total_adj_net_incm_amt: Option<i64>,

    /// Compensation of officers, directors, trustees - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/CompOfcrDirTrstNetInvstIncmAmt",
        line = "Part I Line 13 Column B"
    )]
    pub comp_ofcr_dir_trst_net_invst_incm_amt: Option<i64>,

    /// Compensation of officers, directors, trustees - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/CompOfcrDirTrstAdjNetIncmAmt",
        line = "Part I Line 13 Column C"
    )]
    pub comp_ofcr_dir_trst_adj_net_incm_amt: Option<i64>,

    /// Compensation of officers, directors, trustees - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/CompOfcrDirTrstDsbrsChrtblAmt",
        line = "Part I Line 13 Column D"
    )]
    pub comp_ofcr_dir_trst_dsbrs_chrtbl_amt: Option<i64>,

    /// Other employee salaries and wages - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OthEmplSlrsWgsRevAndExpnssAmt",
        line = "Part I Line 14 Column A"
    )]
    pub oth_empl_slrs_wgs_rev_and_expnss_amt: Option<i64>,

    /// Other employee salaries and wages - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OthEmplSlrsWgsNetInvstIncmAmt",
        line = "Part I Line 14 Column B"
    )]
    pub oth_empl_slrs_wgs_net_invst_incm_amt: Option<i64>,

    /// Other employee salaries and wages - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OthEmplSlrsWgsAdjNetIncmAmt",
        line = "Part I Line 14 Column C"
    )]
    pub oth_empl_slrs_wgs_adj_net_incm_amt: Option<i64>,

    /// Other employee salaries and wages - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OthEmplSlrsWgsDsbrsChrtblAmt",
        line = "Part I Line 14 Column D"
    )]
    pub oth_empl_slrs_wgs_dsbrs_chrtbl_amt: Option<i64>,

    /// Pension plans, employee benefits - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PensionEmplBnftRevAndExpnssAmt",
        line = "Part I Line 15 Column A"
    )]
    pub pension_empl_bnft_rev_and_expnss_amt: Option<i64>,

    /// Pension plans, employee benefits - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PensionEmplBnftNetInvstIncmAmt",
        line = "Part I Line 15 Column B"
    )]
    pub pension_empl_bnft_net_invst_incm_amt: Option<i64>,

    /// Pension plans, employee benefits - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PensionEmplBnftAdjNetIncmAmt",
        line = "Part I Line 15 Column C"
    )]
    pub pension_empl_bnft_adj_net_incm_amt: Option<i64>,

    /// Pension plans, employee benefits - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PensionEmplBnftDsbrsChrtblAmt",
        line = "Part I Line 15 Column D"
    )]
    pub pension_empl_bnft_dsbrs_chrtbl_amt: Option<i64>,

    /// Legal fees - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/LegalFeesRevAndExpnssAmt",
        line = "Part I Line 16a Column A"
    )]
    pub legal_fees_rev_and_expnss_amt: Option<i64>,

    /// Legal fees - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/LegalFeesNetInvstIncmAmt",
        line = "Part I Line 16a Column B"
    )]
    pub legal_fees_net_invst_incm_amt: Option<i64>,

    /// Legal fees - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/LegalFeesAdjNetIncmAmt",
        line = "Part I Line 16a Column C"
    )]
    pub legal_fees_adj_net_incm_amt: Option<i64>,

    /// Legal fees - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/LegalFeesDsbrsChrtblAmt",
        line = "Part I Line 16a Column D"
    )]
    pub legal_fees_dsbrs_chrtbl_amt: Option<i64>,

    /// Accounting fees - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/AccountingFeesRevAndExpnssAmt",
        line = "Part I Line 16b Column A"
    )]
    pub accounting_fees_rev_and_expnss_amt: Option<i64>,

    /// Accounting fees - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/AccountingFeesNetInvstIncmAmt",
        line = "Part I Line 16b Column B"
    )]
    pub accounting_fees_net_invst_incm_amt: Option<i64>,

    /// Accounting fees - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/AccountingFeesAdjNetIncmAmt",
        line = "Part I Line 16b Column C"
    )]
    pub accounting_fees_adj_net_incm_amt: Option<i64>,

    /// Accounting fees - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/AccountingFeesDsbrsChrtblAmt",
        line = "Part I Line 16b Column D"
    )]
    pub accounting_fees_dsbrs_chrtbl_amt: Option<i64>,

    /// Other professional fees - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherProfFeesRevAndExpnssAmt",
        line = "Part I Line 16c Column A"
    )]
    pub other_prof_fees_rev_and_expnss_amt: Option<i64>,

    /// Other professional fees - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherProfFeesNetInvstIncmAmt",
        line = "Part I Line 16c Column B"
    )]
    pub other_prof_fees_net_invst_incm_amt: Option<i64>,

    /// Other professional fees - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherProfFeesAdjNetIncmAmt",
        line = "Part I Line 16c Column C"
    )]
    pub other_prof_fees_adj_net_incm_amt: Option<i64>,

    /// Other professional fees - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherProfFeesDsbrsChrtblAmt",
        line = "Part I Line 16c Column D"
    )]
    pub other_prof_fees_dsbrs_chrtbl_amt: Option<i64>,

    /// Interest - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/InterestRevAndExpnssAmt",
        line = "Part I Line 17 Column A"
    )]
    pub interest_rev_and_expnss_amt: Option<i64>,

    /// Interest - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/InterestNetInvstIncmAmt",
        line = "Part I Line 17 Column B"
    )]
    pub interest_net_invst_incm_amt: Option<i64>,

    /// Interest - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/InterestAdjNetIncmAmt",
        line = "Part I Line 17 Column C"
    )]
    pub interest_adj_net_incm_amt: Option<i64>,

    /// Interest - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/InterestDsbrsChrtblAmt",
        line = "Part I Line 17 Column D"
    )]
    pub interest_dsbrs_chrtbl_amt: Option<i64>,

    /// Taxes - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TaxesRevAndExpnssAmt",
        line = "Part I Line 18 Column A"
    )]
    pub taxes_rev_and_expnss_amt: Option<i64>,

    /// Taxes - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TaxesNetInvstIncmAmt",
        line = "Part I Line 18 Column B"
    )]
    pub taxes_net_invst_incm_amt: Option<i64>,

    /// Taxes - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TaxesAdjNetIncmAmt",
        line = "Part I Line 18 Column C"
    )]
    pub taxes_adj_net_incm_amt: Option<i64>,

    /// Taxes - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TaxesDsbrsChrtblAmt",
        line = "Part I Line 18 Column D"
    )]
    pub taxes_dsbrs_chrtbl_amt: Option<i64>,

    /// Depreciation and depletion - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/DepreciationRevAndExpnssAmt",
        line = "Part I Line 19 Column A"
    )]
    pub depreciation_rev_and_expnss_amt: Option<i64>,

    /// Depreciation and depletion - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/DepreciationNetInvstIncmAmt",
        line = "Part I Line 19 Column B"
    )]
    pub depreciation_net_invst_incm_amt: Option<i64>,

    /// Depreciation and depletion - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/DepreciationAdjNetIncmAmt",
        line = "Part I Line 19 Column C"
    )]
    pub depreciation_adj_net_incm_amt: Option<i64>,

    /// Occupancy - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OccupancyRevAndExpnssAmt",
        line = "Part I Line 20 Column A"
    )]
    pub occupancy_rev_and_expnss_amt: Option<i64>,

    /// Occupancy - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OccupancyNetInvstIncmAmt",
        line = "Part I Line 20 Column B"
    )]
    pub occupancy_net_invst_incm_amt: Option<i64>,

    /// Occupancy - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OccupancyAdjNetIncmAmt",
        line = "Part I Line 20 Column C"
    )]
    pub occupancy_adj_net_incm_amt: Option<i64>,

    /// Occupancy - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OccupancyDsbrsChrtblAmt",
        line = "Part I Line 20 Column D"
    )]
    pub occupancy_dsbrs_chrtbl_amt: Option<i64>,

    /// Travel, conferences and meetings - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TravConfMeetingRevAndExpnssAmt",
        line = "Part I Line 21 Column A"
    )]
    pub trav_conf_meeting_rev_and_expnss_amt: Option<i64>,

    /// Travel, conferences and meetings - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TravConfMeetingNetInvstIncmAmt",
        line = "Part I Line 21 Column B"
    )]
    pub trav_conf_meeting_net_invst_incm_amt: Option<i64>,

    /// Travel, conferences and meetings - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TravConfMeetingAdjNetIncmAmt",
        line = "Part I Line 21 Column C"
    )]
    pub trav_conf_meeting_adj_net_incm_amt: Option<i64>,

    /// Travel, conferences and meetings - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TravConfMeetingDsbrsChrtblAmt",
        line = "Part I Line 21 Column D"
    )]
    pub trav_conf_meeting_dsbrs_chrtbl_amt: Option<i64>,

    /// Printing and publications - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PrintingAndPubRevAndExpnssAmt",
        line = "Part I Line 22 Column A"
    )]
    pub printing_and_pub_rev_and_expnss_amt: Option<i64>,

    /// Printing and publications - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PrintingAndPubNetInvstIncmAmt",
        line = "Part I Line 22 Column B"
    )]
    pub printing_and_pub_net_invst_incm_amt: Option<i64>,

    /// Printing and publications - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PrintingAndPubAdjNetIncmAmt",
        line = "Part I Line 22 Column C"
    )]
    pub printing_and_pub_adj_net_incm_amt: Option<i64>,

    /// Printing and publications - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/PrintingAndPubDsbrsChrtblAmt",
        line = "Part I Line 22 Column D"
    )]
    pub printing_and_pub_dsbrs_chrtbl_amt: Option<i64>,

    /// Other expenses - revenue and expenses per books
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherExpensesRevAndExpnssAmt",
        line = "Part I Line 23 Column A"
    )]
    pub other_expenses_rev_and_expnss_amt: Option<i64>,

    /// Other expenses - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherExpensesNetInvstIncmAmt",
        line = "Part I Line 23 Column B"
    )]
    pub other_expenses_net_invst_incm_amt: Option<i64>,

    /// Other expenses - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherExpensesAdjNetIncmAmt",
        line = "Part I Line 23 Column C"
    )]
    pub other_expenses_adj_net_incm_amt: Option<i64>,

    /// Other expenses - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/OtherExpensesDsbrsChrtblAmt",
        line = "Part I Line 23 Column D"
    )]
    pub other_expenses_dsbrs_chrtbl_amt: Option<i64>,

    /// Total operating and administrative expenses - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotOprExpensesNetInvstIncmAmt",
        line = "Part I Line 24 Column B"
    )]
    pub tot_opr_expenses_net_invst_incm_amt: Option<i64>,

    /// Total operating and administrative expenses - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotOprExpensesAdjNetIncmAmt",
        line = "Part I Line 24 Column C"
    )]
    pub tot_opr_expenses_adj_net_incm_amt: Option<i64>,

    /// Total operating and administrative expenses - disbursements for charitable purposes
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotOprExpensesDsbrsChrtblAmt",
        line = "Part I Line 24 Column D"
    )]
    pub tot_opr_expenses_dsbrs_chrtbl_amt: Option<i64>,

    /// Total expenses and disbursements - net investment income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotalExpensesNetInvstIncmAmt",
        line = "Part I Line 26 Column B"
    )]
    pub total_expenses_net_invst_incm_amt: Option<i64>,

    /// Total expenses and disbursements - adjusted net income
    #[field(
        xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/TotalExpensesAdjNetIncmAmt",
        line = "Part I Line 26 Column C"
    )]
    pub total_expenses_adj_net_incm_amt: Option<i64>,

    /// Adjusted net income
    #[field(xpath = "/IRS990PF/AnalysisOfRevenueAndExpenses/AdjustedNetIncomeAmt", line = "Part I Line 27c")]
    pub adjusted_net_income_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_pf_part_ii", form = "Form990PF", part = "Part II", description = "Balance sheets")]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Cash, non-interest-bearing - EOY book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CashEOYAmt", line = "Part II Line 1 Column B")]
    pub cash_eoy_amt: Option<i64>,

    /// Savings and temporary cash investments - EOY book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/SavAndTempCashInvstEOYAmt", line = "Part II Line 2 Column B")]
    pub sav_and_temp_cash_invst_eoy_amt: Option<i64>,

    /// Corporate stock investments - EOY book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CorporateStockEOYAmt", line = "Part II Line 10b Column B")]
    pub corporate_stock_eoy_amt: Option<i64>,

    /// Total assets - BOY
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotalAssetsBOYAmt", line = "Part II Line 16 Column A")]
    pub total_assets_boy_amt: Option<i64>,

    /// Total assets - EOY book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotalAssetsEOYAmt", line = "Part II Line 16 Column B")]
    pub total_assets_eoy_amt: Option<i64>,

    /// Total assets - EOY fair market value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotalAssetsEOYFMVAmt", line = "Part II Line 16 Column C")]
    pub total_assets_eoy_fmv_amt: Option<i64>,

    /// Total liabilities - BOY
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotalLiabilitiesBOYAmt", line = "Part II Line 23 Column A")]
    pub total_liabilities_boy_amt: Option<i64>,

    /// Total liabilities - EOY
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotalLiabilitiesEOYAmt", line = "Part II Line 23 Column B")]
    pub total_liabilities_eoy_amt: Option<i64>,

    /// Total net assets or fund balances - BOY
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotNetAstOrFundBalancesBOYAmt", line = "Part II Line 30 Column A")]
    pub tot_net_ast_or_fund_balances_boy_amt: Option<i64>,

    /// Total net assets or fund balances - EOY
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotNetAstOrFundBalancesEOYAmt", line = "Part II Line 30 Column B")]
    pub tot_net_ast_or_fund_balances_eoy_amt: Option<i64>,

    /// Cash, non-interest-bearing - beginning of year book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CashBOYAmt", line = "Part II Line 1 Column A")]
    pub cash_boy_amt: Option<i64>,

    /// Cash, non-interest-bearing - end of year fair market value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CashEOYFMVAmt", line = "Part II Line 1 Column C")]
    pub cash_eoyfmv_amt: Option<i64>,

    /// Savings and temporary cash investments - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/SavAndTempCashInvstBOYAmt",
        line = "Part II Line 2 Column A"
    )]
    pub sav_and_temp_cash_invst_boy_amt: Option<i64>,

    /// Savings and temporary cash investments - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/SavAndTempCashInvstEOYFMVAmt",
        line = "Part II Line 2 Column C"
    )]
    pub sav_and_temp_cash_invst_eoyfmv_amt: Option<i64>,

    /// Accounts receivable, net - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/AccountsReceivableBOYAmt",
        line = "Part II Line 3 Column A"
    )]
    pub accounts_receivable_boy_amt: Option<i64>,

    /// Accounts receivable, net - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/AccountsReceivableEOYAmt",
        line = "Part II Line 3 Column B"
    )]
    pub accounts_receivable_eoy_amt: Option<i64>,

    /// Accounts receivable, net - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/AccountsReceivableEOYFMVAmt",
        line = "Part II Line 3 Column C"
    )]
    pub accounts_receivable_eoyfmv_amt: Option<i64>,

    /// Pledges receivable, net - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PledgesRcvblBOYAmt",
        line = "Part II Line 4 Column A"
    )]
    pub pledges_rcvbl_boy_amt: Option<i64>,

    /// Pledges receivable, net - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PledgesRcvblEOYAmt",
        line = "Part II Line 4 Column B"
    )]
    pub pledges_rcvbl_eoy_amt: Option<i64>,

    /// Pledges receivable, net - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PledgesRcvblEOYFMVAmt",
        line = "Part II Line 4 Column C"
    )]
    pub pledges_rcvbl_eoyfmv_amt: Option<i64>,

    /// Grants receivable - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/GrantsReceivableBOYAmt",
        line = "Part II Line 5 Column A"
    )]
    pub grants_receivable_boy_amt: Option<i64>,

    /// Grants receivable - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/GrantsReceivableEOYAmt",
        line = "Part II Line 5 Column B"
    )]
    pub grants_receivable_eoy_amt: Option<i64>,

    /// Grants receivable - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/GrantsReceivableEOYFMVAmt",
        line = "Part II Line 5 Column C"
    )]
    pub grants_receivable_eoyfmv_amt: Option<i64>,

    /// Receivables due from officers, directors, trustees and disqualified persons - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/RcvblFromOfficersBOYAmt",
        line = "Part II Line 6 Column A"
    )]
    pub rcvbl_from_officers_boy_amt: Option<i64>,

    /// Receivables due from officers, directors, trustees and disqualified persons - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/RcvblFromOfficersEOYAmt",
        line = "Part II Line 6 Column B"
    )]
    pub rcvbl_from_officers_eoy_amt: Option<i64>,

    /// Receivables due from officers, directors, trustees and disqualified persons - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/RcvblFromOfficersEOYFMVAmt",
        line = "Part II Line 6 Column C"
    )]
    pub rcvbl_from_officers_eoyfmv_amt: Option<i64>,

    /// Other notes and loans receivable, net - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherNotesLoansRcvblBOYAmt",
        line = "Part II Line 7 Column A"
    )]
    pub other_notes_loans_rcvbl_boy_amt: Option<i64>,

    /// Other notes and loans receivable, net - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherNotesLoansRcvblEOYAmt",
        line = "Part II Line 7 Column B"
    )]
    pub other_notes_loans_rcvbl_eoy_amt: Option<i64>,

    /// Other notes and loans receivable, net - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherNotesLoansRcvblEOYFMVAmt",
        line = "Part II Line 7 Column C"
    )]
    pub other_notes_loans_rcvbl_eoyfmv_amt: Option<i64>,

    /// Inventories for sale or use - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InventoriesBOYAmt",
        line = "Part II Line 8 Column A"
    )]
    pub inventories_boy_amt: Option<i64>,

    /// Inventories for sale or use - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InventoriesEOYAmt",
        line = "Part II Line 8 Column B"
    )]
    pub inventories_eoy_amt: Option<i64>,

    /// Inventories for sale or use - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InventoriesEOYFMVAmt",
        line = "Part II Line 8 Column C"
    )]
    pub inventories_eoyfmv_amt: Option<i64>,

    /// Prepaid expenses and deferred charges - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PrepaidExpensesBOYAmt",
        line = "Part II Line 9 Column A"
    )]
    pub prepaid_expenses_boy_amt: Option<i64>,

    /// Prepaid expenses and deferred charges - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PrepaidExpensesEOYAmt",
        line = "Part II Line 9 Column B"
    )]
    pub prepaid_expenses_eoy_amt: Option<i64>,

    /// Prepaid expenses and deferred charges - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PrepaidExpensesEOYFMVAmt",
        line = "Part II Line 9 Column C"
    )]
    pub prepaid_expenses_eoyfmv_amt: Option<i64>,

    /// Investments in US and state government obligations - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/USGovernmentObligationsBOYAmt",
        line = "Part II Line 10a Column A"
    )]
    pub us_government_obligations_boy_amt: Option<i64>,

    /// Investments in US and state government obligations - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/USGovernmentObligationsEOYAmt",
        line = "Part II Line 10a Column B"
    )]
    pub us_government_obligations_eoy_amt: Option<i64>,

    /// Investments in US and state government obligations - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/USGovernmentObligationsEOYFMVAmt",
        line = "Part II Line 10a Column C"
    )]
    pub us_government_obligations_eoyfmv_amt: Option<i64>,

    /// Investments in corporate stock - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CorporateStockBOYAmt",
        line = "Part II Line 10b Column A"
    )]
    pub corporate_stock_boy_amt: Option<i64>,

    /// Investments in corporate stock - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CorporateStockEOYFMVAmt",
        line = "Part II Line 10b Column C"
    )]
    pub corporate_stock_eoyfmv_amt: Option<i64>,

    /// Investments in corporate bonds - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CorporateBondsBOYAmt",
        line = "Part II Line 10c Column A"
    )]
    pub corporate_bonds_boy_amt: Option<i64>,

    /// Investments in corporate bonds - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CorporateBondsEOYAmt",
        line = "Part II Line 10c Column B"
    )]
    pub corporate_bonds_eoy_amt: Option<i64>,

    /// Investments in corporate bonds - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CorporateBondsEOYFMVAmt",
        line = "Part II Line 10c Column C"
    )]
    pub corporate_bonds_eoyfmv_amt: Option<i64>,

    /// Investments in land, buildings and equipment, net - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InvestmentsLandBOYAmt",
        line = "Part II Line 11 Column A"
    )]
    pub investments_land_boy_amt: Option<i64>,

    /// Investments in land, buildings and equipment, net - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InvestmentsLandEOYAmt",
        line = "Part II Line 11 Column B"
    )]
    pub investments_land_eoy_amt: Option<i64>,

    /// Investments in land, buildings and equipment, net - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InvestmentsLandEOYFMVAmt",
        line = "Part II Line 11 Column C"
    )]
    pub investments_land_eoyfmv_amt: Option<i64>,

    /// Investments in mortgage loans - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InvestmentsMortgageLoansBOYAmt",
        line = "Part II Line 12 Column A"
    )]
    pub investments_mortgage_loans_boy_amt: Option<i64>,

    /// Investments in mortgage loans - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InvestmentsMortgageLoansEOYAmt",
        line = "Part II Line 12 Column B"
    )]
    pub investments_mortgage_loans_eoy_amt: Option<i64>,

    /// Investments in mortgage loans - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/InvestmentsMortgageLoansEOYFMVAmt",
        line = "Part II Line 12 Column C"
    )]
    pub investments_mortgage_loans_eoyfmv_amt: Option<i64>,

    /// Other investments - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherInvestmentsBOYAmt",
        line = "Part II Line 13 Column A"
    )]
    pub other_investments_boy_amt: Option<i64>,

    /// Other investments - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherInvestmentsEOYAmt",
        line = "Part II Line 13 Column B"
    )]
    pub other_investments_eoy_amt: Option<i64>,

    /// Other investments - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherInvestmentsEOYFMVAmt",
        line = "Part II Line 13 Column C"
    )]
    pub other_investments_eoyfmv_amt: Option<i64>,

    /// Land, buildings and equipment, net - beginning of year book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/LandBOYAmt", line = "Part II Line 14 Column A")]
    pub land_boy_amt: Option<i64>,

    /// Land, buildings and equipment, net - end of year book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/LandEOYAmt", line = "Part II Line 14 Column B")]
    pub land_eoy_amt: Option<i64>,

    /// Land, buildings and equipment, net - end of year fair market value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/LandEOYFMVAmt", line = "Part II Line 14 Column C")]
    pub land_eoyfmv_amt: Option<i64>,

    /// Other assets - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherAssetsBOYAmt",
        line = "Part II Line 15 Column A"
    )]
    pub other_assets_boy_amt: Option<i64>,

    /// Other assets - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherAssetsEOYAmt",
        line = "Part II Line 15 Column B"
    )]
    pub other_assets_eoy_amt: Option<i64>,

    /// Other assets - end of year fair market value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherAssetsEOYFMVAmt",
        line = "Part II Line 15 Column C"
    )]
    pub other_assets_eoyfmv_amt: Option<i64>,

    /// Accounts payable and accrued expenses - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/AccountsPayableBOYAmt",
        line = "Part II Line 17 Column A"
    )]
    pub accounts_payable_boy_amt: Option<i64>,

    /// Accounts payable and accrued expenses - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/AccountsPayableEOYAmt",
        line = "Part II Line 17 Column B"
    )]
    pub accounts_payable_eoy_amt: Option<i64>,

    /// Grants payable - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/GrantsPayableBOYAmt",
        line = "Part II Line 18 Column A"
    )]
    pub grants_payable_boy_amt: Option<i64>,

    /// Grants payable - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/GrantsPayableEOYAmt",
        line = "Part II Line 18 Column B"
    )]
    pub grants_payable_eoy_amt: Option<i64>,

    /// Deferred revenue - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/DeferredRevenueBOYAmt",
        line = "Part II Line 19 Column A"
    )]
    pub deferred_revenue_boy_amt: Option<i64>,

    /// Deferred revenue - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/DeferredRevenueEOYAmt",
        line = "Part II Line 19 Column B"
    )]
    pub deferred_revenue_eoy_amt: Option<i64>,

    /// Loans from officers, directors, trustees and other disqualified persons - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/LoansFromOfficersBOYAmt",
        line = "Part II Line 20 Column A"
    )]
    pub loans_from_officers_boy_amt: Option<i64>,

    /// Loans from officers, directors, trustees and other disqualified persons - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/LoansFromOfficersEOYAmt",
        line = "Part II Line 20 Column B"
    )]
    pub loans_from_officers_eoy_amt: Option<i64>,

    /// Mortgages and other notes payable - beginning of year book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/MortgagesBOYAmt", line = "Part II Line 21 Column A")]
    pub mortgages_boy_amt: Option<i64>,

    /// Mortgages and other notes payable - end of year book value
    #[field(xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/MortgagesEOYAmt", line = "Part II Line 21 Column B")]
    pub mortgages_eoy_amt: Option<i64>,

    /// Other liabilities - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherLiabilitiesBOYAmt",
        line = "Part II Line 22 Column A"
    )]
    pub other_liabilities_boy_amt: Option<i64>,

    /// Other liabilities - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OtherLiabilitiesEOYAmt",
        line = "Part II Line 22 Column B"
    )]
    pub other_liabilities_eoy_amt: Option<i64>,

    /// Organization follows SFAS 117
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OrganizationFollowsSFAS117Ind",
        line = "Part II Line 24 Heading",
        max_length = 5
    )]
    pub organization_follows_sfas_117_ind: Option<String>,

    /// Unrestricted net assets - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/UnrestrictedBOYAmt",
        line = "Part II Line 24 Column A"
    )]
    pub unrestricted_boy_amt: Option<i64>,

    /// Unrestricted net assets - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/UnrestrictedEOYAmt",
        line = "Part II Line 24 Column B"
    )]
    pub unrestricted_eoy_amt: Option<i64>,

    /// Temporarily restricted net assets - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TemporarilyRestrictedBOYAmt",
        line = "Part II Line 25 Column A"
    )]
    pub temporarily_restricted_boy_amt: Option<i64>,

    /// Temporarily restricted net assets - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TemporarilyRestrictedEOYAmt",
        line = "Part II Line 25 Column B"
    )]
    pub temporarily_restricted_eoy_amt: Option<i64>,

    /// Permanently restricted net assets - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PermanentlyRestrictedBOYAmt",
        line = "Part II Line 26 Column A"
    )]
    pub permanently_restricted_boy_amt: Option<i64>,

    /// Permanently restricted net assets - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PermanentlyRestrictedEOYAmt",
        line = "Part II Line 26 Column B"
    )]
    pub permanently_restricted_eoy_amt: Option<i64>,

    /// Organization does not follow SFAS 117
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/OrgDoesNotFollowSFAS117Ind",
        line = "Part II Line 27 Heading",
        max_length = 5
    )]
    pub org_does_not_follow_sfas_117_ind: Option<String>,

    /// Capital stock, trust principal, or current funds - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CapitalStockBOYAmt",
        line = "Part II Line 27 Column A"
    )]
    pub capital_stock_boy_amt: Option<i64>,

    /// Capital stock, trust principal, or current funds - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/CapitalStockEOYAmt",
        line = "Part II Line 27 Column B"
    )]
    pub capital_stock_eoy_amt: Option<i64>,

    /// Paid-in or capital surplus - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PaidInCapitalSrplsBOYAmt",
        line = "Part II Line 28 Column A"
    )]
    pub paid_in_capital_srpls_boy_amt: Option<i64>,

    /// Paid-in or capital surplus - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/PaidInCapitalSrplsEOYAmt",
        line = "Part II Line 28 Column B"
    )]
    pub paid_in_capital_srpls_eoy_amt: Option<i64>,

    /// Retained earnings, accumulated income, endowment - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/RetainedEarningBOYAmt",
        line = "Part II Line 29 Column A"
    )]
    pub retained_earning_boy_amt: Option<i64>,

    /// Retained earnings, accumulated income, endowment - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/RetainedEarningEOYAmt",
        line = "Part II Line 29 Column B"
    )]
    pub retained_earning_eoy_amt: Option<i64>,

    /// Total liabilities and net assets or fund balances - beginning of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotLiabNetAstBalancesBOYAmt",
        line = "Part II Line 31 Column A"
    )]
    pub tot_liab_net_ast_balances_boy_amt: Option<i64>,

    /// Total liabilities and net assets or fund balances - end of year book value
    #[field(
        xpath = "/IRS990PF/Form990PFBalanceSheetsGrp/TotLiabNetAstBalancesEOYAmt",
        line = "Part II Line 31 Column B"
    )]
    pub tot_liab_net_ast_balances_eoy_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_iii",
    form = "Form990PF",
    part = "Part III",
    description = "Analysis of changes in net assets or fund balances"
)]
pub struct PartIII {
    pub object_id: String,
    pub ein: String,

    /// Total net assets or fund balances at beginning of year
    #[field(
        xpath = "/IRS990PF/ChgInNetAssetsFundBalancesGrp/TotNetAstOrFundBalancesBOYAmt",
        line = "Part III Line 1"
    )]
    pub tot_net_ast_or_fund_balances_boy_amt: Option<i64>,

    /// Excess of revenue over expenses
    #[field(
        xpath = "/IRS990PF/ChgInNetAssetsFundBalancesGrp/ExcessRevenueOverExpensesAmt",
        line = "Part III Line 2"
    )]
    pub excess_revenue_over_expenses_amt: Option<i64>,

    /// Other increases not included in line 2
    #[field(xpath = "/IRS990PF/ChgInNetAssetsFundBalancesGrp/OtherIncreasesAmt", line = "Part III Line 3")]
    pub other_increases_amt: Option<i64>,

    /// Subtotal
    #[field(xpath = "/IRS990PF/ChgInNetAssetsFundBalancesGrp/SubtotalAmt", line = "Part III Line 4")]
    pub subtotal_amt: Option<i64>,

    /// Decreases not included in line 2
    #[field(xpath = "/IRS990PF/ChgInNetAssetsFundBalancesGrp/OtherDecreasesAmt", line = "Part III Line 5")]
    pub other_decreases_amt: Option<i64>,

    /// Total net assets or fund balances at end of year
    #[field(
        xpath = "/IRS990PF/ChgInNetAssetsFundBalancesGrp/TotNetAstOrFundBalancesEOYAmt",
        line = "Part III Line 6"
    )]
    pub tot_net_ast_or_fund_balances_eoy_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_iv",
    form = "Form990PF",
    part = "Part IV",
    description = "Capital gains and losses for tax on investment income"
)]
pub struct PartIV {
    pub object_id: String,
    pub ein: String,

    /// Capital gain net income or net capital loss
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapitalGainNetIncomeAmt",
        line = "Part IV Line 2"
    )]
    pub capital_gain_net_income_amt: Option<i64>,

    /// Net short-term capital gain or loss
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/NetSTCapitalGainOrLossAmt",
        line = "Part IV Line 3"
    )]
    pub net_st_capital_gain_or_loss_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_cpgnslssstxinvstincmdtl",
    form = "Form990PF",
    part = "Part IV",
    description = "Capital gains and losses detail",
    group = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail",
    parent = "return_pf_part_iv"
)]
pub struct CapGainsLossesTxInvstIncmDetail {
    pub object_id: String,
    pub ein: String,

    /// Kind of property sold
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/PropertyDesc",
        line = "Part IV Line 1 Column A",
        long
    )]
    pub property_desc: Option<String>,

    /// How acquired: purchase or donation
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/HowAcquiredCd",
        line = "Part IV Line 1 Column B",
        max_length = 1
    )]
    pub how_acquired_cd: Option<String>,

    /// Date acquired
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/AcquiredDt",
        line = "Part IV Line 1 Column C",
        date
    )]
    pub acquired_dt: Option<String>,

    /// Date sold
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/SoldDt",
        line = "Part IV Line 1 Column D",
        date
    )]
    pub sold_dt: Option<String>,

    /// Gross sales price
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/GrossSalesPriceAmt",
        line = "Part IV Line 1 Column E"
    )]
    pub gross_sales_price_amt: Option<i64>,

    /// Depreciation allowed or allowable
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/DepreciationAllowedAmt",
        line = "Part IV Line 1 Column F"
    )]
    pub depreciation_allowed_amt: Option<i64>,

    /// Cost or other basis plus expense of sale
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/CostOrOtherBasisAmt",
        line = "Part IV Line 1 Column G"
    )]
    pub cost_or_other_basis_amt: Option<i64>,

    /// Gain or loss
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/GainOrLossAmt",
        line = "Part IV Line 1 Column H"
    )]
    pub gain_or_loss_amt: Option<i64>,

    /// Fair market value as of 12/31/69
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/FMVAsOf123169Amt",
        line = "Part IV Line 1 Column I"
    )]
    pub fmv_as_of_123169_amt: Option<i64>,

    /// Adjusted basis as of 12/31/69
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/AdjustedBasisAsOf123169Amt",
        line = "Part IV Line 1 Column J",
        name = "CpGnsLsssTxInvstIncmDtl_AdjstdBssAsOf123169Amt"
    )]
    pub adjusted_basis_as_of_123169_amt: Option<i64>,

    /// Excess of fair market value over adjusted basis
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/ExcessFMVOverAdjustedBasisAmt",
        line = "Part IV Line 1 Column K",
        name = "CpGnsLsssTxInvstIncmDtl_ExcssFMVOvrAdjstdBssAmt"
    )]
    pub excess_fmv_over_adjusted_basis_amt: Option<i64>,

    /// Gains minus excess or losses
    #[field(
        xpath = "/IRS990PF/CapGainsLossesTxInvstIncmGrp/CapGainsLossesTxInvstIncmDetail/GainsMinusExcessOrLossesAmt",
        line = "Part IV Line 1 Column L",
        name = "CpGnsLsssTxInvstIncmDtl_GnsMnsExcssOrLsssAmt"
    )]
    pub gains_minus_excess_or_losses_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_vi",
    form = "Form990PF",
    part = "Part VI",
    description = "Excise tax based on investment income"
)]
pub struct PartVI {
    pub object_id: String,
    pub ein: String,

    /// Exempt operating foundations
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/ExemptOperatingFoundationsInd", line = "Part VI Line 1a", max_length = 5)]
    pub exempt_operating_foundations_ind: Option<String>,

    /// Tax under section 511
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/TaxUnderSection511Amt", line = "Part VI Line 2")]
    pub tax_under_section_511_amt: Option<i64>,

    /// Tax based on investment income
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/InvestmentIncomeExciseTaxAmt", line = "Part VI Line 5")]
    pub investment_income_excise_tax_amt: Option<i64>,

    /// Total credits and payments
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/TotalPaymentsAmt", line = "Part VI Line 7")]
    pub total_payments_amt: Option<i64>,

    /// Tax due
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/TaxDueAmt", line = "Part VI Line 9")]
    pub tax_due_amt: Option<i64>,

    /// Overpayment
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/OverpaymentAmt", line = "Part VI Line 10")]
    pub overpayment_amt: Option<i64>,

    /// Date of ruling or determination letter
    #[field(
        xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/ExemptOperatingFoundationsDt",
        line = "Part VI Line 1a",
        date
    )]
    pub exempt_operating_foundations_dt: Option<String>,

    /// Domestic foundation meeting the section 4940(e) requirements
    #[field(
        xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/DomesticOrgMeetSect4940eInd",
        line = "Part VI Line 1b",
        max_length = 5
    )]
    pub domestic_org_meet_sect_4940e_ind: Option<String>,

    /// Subtotal
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/SubtotalAmt", line = "Part VI Line 3")]
    pub subtotal_amt: Option<i64>,

    /// Subtitle A income tax
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/SubtitleATaxAmt", line = "Part VI Line 4")]
    pub subtitle_a_tax_amt: Option<i64>,

    /// Tax based on investment income
    #[field(
        xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/TaxBasedOnInvestmentIncomeAmt",
        line = "Part VI Line 5"
    )]
    pub tax_based_on_investment_income_amt: Option<i64>,

    /// Estimated tax payments and prior year overpayment credited
    #[field(
        xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/EstimatedTaxPaymentsAmt",
        line = "Part VI Line 6a"
    )]
    pub estimated_tax_payments_amt: Option<i64>,

    /// Exempt foreign organizations: tax withheld at source
    #[field(
        xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/ExemptForeignOrgTaxWithheldAmt",
        line = "Part VI Line 6b"
    )]
    pub exempt_foreign_org_tax_withheld_amt: Option<i64>,

    /// Tax paid with application for extension
    #[field(
        xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/TaxPaidWithExtensionAmt",
        line = "Part VI Line 6c"
    )]
    pub tax_paid_with_extension_amt: Option<i64>,

    /// Backup withholding erroneously withheld
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/BackupWithholdingAmt", line = "Part VI Line 6d")]
    pub backup_withholding_amt: Option<i64>,

    /// Penalty for underpayment of estimated tax
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/EstimatedTaxPenaltyAmt", line = "Part VI Line 8")]
    pub estimated_tax_penalty_amt: Option<i64>,

    /// Overpayment credited to next year's estimated tax
    #[field(
        xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/CreditedToNextYearsEstTaxAmt",
        line = "Part VI Line 11"
    )]
    pub credited_to_next_years_est_tax_amt: Option<i64>,

    /// Overpayment refunded
    #[field(xpath = "/IRS990PF/ExciseTaxBasedOnInvstIncmGrp/RefundedAmt", line = "Part VI Line 11")]
    pub refunded_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_viia",
    form = "Form990PF",
    part = "Part VII-A",
    description = "Statements regarding activities"
)]
pub struct PartVIIA {
    pub object_id: String,
    pub ein: String,

    /// Attempted to influence legislation or participated in a political campaign
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/LegislativePoliticalActyInd",
        line = "Part VII-A Line 1a",
        max_length = 5
    )]
    pub legislative_political_acty_ind: Option<String>,

    /// Spent more than $100 for political purposes
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/MoreThan100SpentInd",
        line = "Part VII-A Line 1b",
        max_length = 5
    )]
    pub more_than_100_spent_ind: Option<String>,

    /// Filed Form 1120-POL
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/Form1120POLFiledInd",
        line = "Part VII-A Line 1c",
        max_length = 5
    )]
    pub form_1120_pol_filed_ind: Option<String>,

    /// Section 4955 tax imposed on the foundation
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ImposedOnFoundationAmt",
        line = "Part VII-A Line 1d"
    )]
    pub imposed_on_foundation_amt: Option<i64>,

    /// Section 4955 tax imposed on foundation managers
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ImposedOnFoundationManagersAmt",
        line = "Part VII-A Line 1d"
    )]
    pub imposed_on_foundation_managers_amt: Option<i64>,

    /// Reimbursement paid by the foundation for political expenditure tax
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ReimbursementPaidByOrgAmt",
        line = "Part VII-A Line 1e"
    )]
    pub reimbursement_paid_by_org_amt: Option<i64>,

    /// Activities not previously reported to the IRS
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ActivitiesNotPreviouslyRptInd",
        line = "Part VII-A Line 2",
        max_length = 5
    )]
    pub activities_not_previously_rpt_ind: Option<String>,

    /// Changes made to governing instrument
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ChangesToArticlesOrBylawsInd",
        line = "Part VII-A Line 3",
        max_length = 5
    )]
    pub changes_to_articles_or_bylaws_ind: Option<String>,

    /// Unrelated business gross income of $1,000 or more
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/UBIGrossIncomeOver1000Ind",
        line = "Part VII-A Line 4a",
        max_length = 5
    )]
    pub ubi_gross_income_over_1000_ind: Option<String>,

    /// Filed a tax return on Form 990-T
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/OrganizationFiledForm990TInd",
        line = "Part VII-A Line 4b",
        max_length = 5
    )]
    pub organization_filed_form_990_t_ind: Option<String>,

    /// Liquidation, termination, dissolution or substantial contraction
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/LiquidationInd",
        line = "Part VII-A Line 5",
        max_length = 5
    )]
    pub liquidation_ind: Option<String>,

    /// Section 508(e) requirements satisfied by the governing instrument
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/GoverningInstrumentInd",
        line = "Part VII-A Line 6",
        max_length = 5
    )]
    pub governing_instrument_ind: Option<String>,

    /// At least $5,000 in assets at any time during the year
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/AtLeast5000InAssetsInd",
        line = "Part VII-A Line 7",
        max_length = 5
    )]
    pub at_least_5000_in_assets_ind: Option<String>,

    /// State to which the foundation reports
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/StatesWhereFormFiledCd",
        line = "Part VII-A Line 8a",
        max_length = 2
    )]
    pub states_where_form_filed_cd: Option<String>,

    /// Copy of Form 990-PF furnished to the attorney general
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/AttorneyGeneralInd",
        line = "Part VII-A Line 8b",
        max_length = 5
    )]
    pub attorney_general_ind: Option<String>,

    /// Claiming status as a private operating foundation
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/PrivateOperatingFoundationInd",
        line = "Part VII-A Line 9",
        max_length = 5
    )]
    pub private_operating_foundation_ind: Option<String>,

    /// New substantial contributors during the year
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/NewSubstantialContributorsInd",
        line = "Part VII-A Line 10",
        max_length = 5
    )]
    pub new_substantial_contributors_ind: Option<String>,

    /// Distribution to a controlled entity
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ControlledEntityInd",
        line = "Part VII-A Line 11",
        max_length = 5
    )]
    pub controlled_entity_ind: Option<String>,

    /// Distribution to a donor advised fund
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/DonorAdvisedFundInd",
        line = "Part VII-A Line 12",
        max_length = 5
    )]
    pub donor_advised_fund_ind: Option<String>,

    /// Complied with the public inspection requirements
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/PublicInspectionRqrCmplInd",
        line = "Part VII-A Line 13",
        max_length = 5
    )]
    pub public_inspection_rqr_cmpl_ind: Option<String>,

    /// Website address
    #[field(xpath = "/IRS990PF/StatementsRegardingActyGrp/WebsiteAddressTxt", line = "Part VII-A Line 13")]
    pub website_address_txt: Option<String>,

    /// Books are in care of
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/BooksInCareOfDetail/PersonNm",
        line = "Part VII-A Line 14"
    )]
    pub person_nm: Option<String>,

    /// Telephone number of the person with the books
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/BooksInCareOfDetail/PhoneNum",
        line = "Part VII-A Line 14",
        max_length = 20
    )]
    pub phone_num: Option<String>,

    /// Address of the person with the books
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/BooksInCareOfDetail/USAddress/AddressLine1Txt",
        line = "Part VII-A Line 14"
    )]
    pub address_line_1_txt: Option<String>,

    /// City of the person with the books
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/BooksInCareOfDetail/USAddress/CityNm",
        line = "Part VII-A Line 14",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State of the person with the books
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/BooksInCareOfDetail/USAddress/StateAbbreviationCd",
        line = "Part VII-A Line 14",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code of the person with the books
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/BooksInCareOfDetail/USAddress/ZIPCd",
        line = "Part VII-A Line 14",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Section 4947(a)(1) trust filing Form 990-PF in lieu of Form 1041
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/Filed1041Ind",
        line = "Part VII-A Line 15",
        max_length = 5
    )]
    pub filed_1041_ind: Option<String>,

    /// Tax-exempt interest received or accrued
    #[field(xpath = "/IRS990PF/StatementsRegardingActyGrp/TaxExemptInterestAmt", line = "Part VII-A Line 15")]
    pub tax_exempt_interest_amt: Option<i64>,

    /// Interest in or signature authority over a foreign financial account
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ForeignCountryFinclAcctInd",
        line = "Part VII-A Line 16",
        max_length = 5
    )]
    pub foreign_country_fincl_acct_ind: Option<String>,

    /// Foreign country of the account
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActyGrp/ForeignCountryCd",
        line = "Part VII-A Line 16",
        max_length = 2
    )]
    pub foreign_country_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_viib",
    form = "Form990PF",
    part = "Part VII-B",
    description = "Statements regarding activities for which Form 4720 may be required"
)]
pub struct PartVIIB {
    pub object_id: String,
    pub ein: String,

    /// Sale, exchange or leasing of property with a disqualified person
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/SaleOrExchangeInd",
        line = "Part VII-B Line 1a1",
        max_length = 5
    )]
    pub sale_or_exchange_ind: Option<String>,

    /// Borrowing or lending money with a disqualified person
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/BorrowOrLendMoneyInd",
        line = "Part VII-B Line 1a2",
        max_length = 5
    )]
    pub borrow_or_lend_money_ind: Option<String>,

    /// Furnishing goods, services or facilities to a disqualified person
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/FurnishGoodsInd",
        line = "Part VII-B Line 1a3",
        max_length = 5
    )]
    pub furnish_goods_ind: Option<String>,

    /// Paying compensation to a disqualified person
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/PayCompensationInd",
        line = "Part VII-B Line 1a4",
        max_length = 5
    )]
    pub pay_compensation_ind: Option<String>,

    /// Transferring income or assets to a disqualified person
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/TransferAnyIncomeOrAssetsInd",
        line = "Part VII-B Line 1a5",
        max_length = 5
    )]
    pub transfer_any_income_or_assets_ind: Option<String>,

    /// Agreeing to pay money or property to a government official
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/PaidToGovernmentOfficialInd",
        line = "Part VII-B Line 1a6",
        max_length = 5
    )]
    pub paid_to_government_official_ind: Option<String>,

    /// Acts failing to qualify under the exceptions
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/ActsFailToQualifyUnderRegsInd",
        line = "Part VII-B Line 1b",
        max_length = 5
    )]
    pub acts_fail_to_qualify_under_regs_ind: Option<String>,

    /// Relying on a current notice regarding disaster assistance
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/RelyingOnCurrentNoticeInd",
        line = "Part VII-B Line 1b",
        max_length = 5
    )]
    pub relying_on_current_notice_ind: Option<String>,

    /// Prior year acts not corrected before the first day of the year
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/UncorrectedPYActsInd",
        line = "Part VII-B Line 1c",
        max_length = 5
    )]
    pub uncorrected_py_acts_ind: Option<String>,

    /// Undistributed income for prior years
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/UndistributedIncomePYInd",
        line = "Part VII-B Line 2a",
        max_length = 5
    )]
    pub undistributed_income_py_ind: Option<String>,

    /// Applying section 4942(a)(2) to undistributed income
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/ApplyingSection4942a2Ind",
        line = "Part VII-B Line 2b",
        max_length = 5
    )]
    pub applying_section_4942a2_ind: Option<String>,

    /// Held more than a 2% interest in a business enterprise
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/ExcessBusinessHoldingsInd",
        line = "Part VII-B Line 3a",
        max_length = 5
    )]
    pub excess_business_holdings_ind: Option<String>,

    /// Excess business holdings at the end of the year
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/ExcessBusinessHoldingsEndInd",
        line = "Part VII-B Line 3b",
        max_length = 5
    )]
    pub excess_business_holdings_end_ind: Option<String>,

    /// Investments jeopardizing charitable purposes
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/JeopardizeExemptPurposeInd",
        line = "Part VII-B Line 4a",
        max_length = 5
    )]
    pub jeopardize_exempt_purpose_ind: Option<String>,

    /// Jeopardizing investments not removed from jeopardy
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/JeopardizePYExemptPurposeInd",
        line = "Part VII-B Line 4b",
        max_length = 5
    )]
    pub jeopardize_py_exempt_purpose_ind: Option<String>,

    /// Paid to carry on propaganda or influence legislation
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/InfluenceLegislationInd",
        line = "Part VII-B Line 5a1",
        max_length = 5
    )]
    pub influence_legislation_ind: Option<String>,

    /// Paid to influence an election or voter registration drive
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/InfluenceElectionInd",
        line = "Part VII-B Line 5a2",
        max_length = 5
    )]
    pub influence_election_ind: Option<String>,

    /// Grants to individuals for travel or study
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/GrantsToIndividualsInd",
        line = "Part VII-B Line 5a3",
        max_length = 5
    )]
    pub grants_to_individuals_ind: Option<String>,

    /// Grants to organizations that are not public charities
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/GrantsToOrganizationsInd",
        line = "Part VII-B Line 5a4",
        max_length = 5
    )]
    pub grants_to_organizations_ind: Option<String>,

    /// Paid for non-charitable purposes
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/NonCharitablePurposeInd",
        line = "Part VII-B Line 5a5",
        max_length = 5
    )]
    pub non_charitable_purpose_ind: Option<String>,

    /// Transactions failing to qualify under the exceptions
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/TransactionsFailToQualifyInd",
        line = "Part VII-B Line 5b",
        max_length = 5
    )]
    pub transactions_fail_to_qualify_ind: Option<String>,

    /// Maintained expenditure responsibility for the grant
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/ExpenditureResponsibilityInd",
        line = "Part VII-B Line 5c",
        max_length = 5
    )]
    pub expenditure_responsibility_ind: Option<String>,

    /// Received funds to pay premiums on a personal benefit contract
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/PremiumsPaidOnPrsnlBnftCntrctInd",
        line = "Part VII-B Line 6a",
        max_length = 5
    )]
    pub premiums_paid_on_prsnl_bnft_cntrct_ind: Option<String>,

    /// Paid premiums on a personal benefit contract
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/PremiumsPrsnlBnftCntrctInd",
        line = "Part VII-B Line 6b",
        max_length = 5
    )]
    pub premiums_prsnl_bnft_cntrct_ind: Option<String>,

    /// Party to a prohibited tax shelter transaction
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/ProhibitedTaxShelterTransInd",
        line = "Part VII-B Line 7a",
        max_length = 5
    )]
    pub prohibited_tax_shelter_trans_ind: Option<String>,

    /// Received proceeds or net income from the transaction
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/ProceedsOrNetIncomeInd",
        line = "Part VII-B Line 7b",
        max_length = 5
    )]
    pub proceeds_or_net_income_ind: Option<String>,

    /// Subject to excise tax on excess compensation or parachute payments
    #[field(
        xpath = "/IRS990PF/StatementsRegardingActy4720Grp/SubjToTaxRmnrtnExPrchtPymtInd",
        line = "Part VII-B Line 8",
        max_length = 5
    )]
    pub subj_to_tax_rmnrtn_ex_prcht_pymt_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_viii",
    form = "Form990PF",
    part = "Part VIII",
    description = "Information about officers, directors, trustees, foundation managers, highly paid employees and contractors"
)]
pub struct PartVIII {
    pub object_id: String,
    pub ein: String,

    /// Number of other employees paid over $50,000
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OtherEmployeePaidOver50kCnt", line = "Part VIII Line 2")]
    pub other_employee_paid_over_50k_cnt: Option<i32>,

    /// Number of contractors paid over $50,000
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/ContractorPaidOver50kCnt", line = "Part VIII Line 3")]
    pub contractor_paid_over_50k_cnt: Option<i32>,

    /// None entered for highest paid employees
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompOfHghstPdEmplOrNONETxt",
        line = "Part VIII Line 2",
        max_length = 4
    )]
    pub comp_of_hghst_pd_empl_or_none_txt: Option<String>,

    /// None entered for highest paid contractors
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompOfHghstPdCntrctOrNONETxt",
        line = "Part VIII Line 3",
        max_length = 4
    )]
    pub comp_of_hghst_pd_cntrct_or_none_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_offcrdrtrstkyempl",
    form = "Form990PF",
    part = "Part VIII",
    description = "Officers, directors, trustees and foundation managers",
    group = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp",
    parent = "return_pf_part_viii"
)]
pub struct OfficerDirTrstKeyEmpl {
    pub object_id: String,
    pub ein: String,

    /// Name of person
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp/PersonNm", line = "Part VIII Line 1 Column A")]
    pub person_nm: Option<String>,

    /// Name of business
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part VIII Line 1 Column A"
    )]
    pub business_name_line1_txt: Option<String>,

    /// Title
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp/TitleTxt", line = "Part VIII Line 1 Column B")]
    pub title_txt: Option<String>,

    /// Average hours per week devoted to position
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp/AverageHrsPerWkDevotedToPosRt", line = "Part VIII Line 1 Column B")]
    pub average_hrs_per_wk_devoted_to_pos_rt: Option<f64>,

    /// Compensation
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp/CompensationAmt", line = "Part VIII Line 1 Column C")]
    pub compensation_amt: Option<i64>,

    /// Contributions to employee benefit plans
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp/EmployeeBenefitProgramAmt", line = "Part VIII Line 1 Column D")]
    pub employee_benefit_program_amt: Option<i64>,

    /// Expense account and other allowances
    #[field(xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/OfficerDirTrstKeyEmplGrp/ExpenseAccountOtherAllwncAmt", line = "Part VIII Line 1 Column E")]
    pub expense_account_other_allwnc_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_cmpnstnhghstpdempl",
    form = "Form990PF",
    part = "Part VIII",
    description = "Compensation of five highest-paid employees",
    group = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp",
    parent = "return_pf_part_viii"
)]
pub struct CompensationHighestPaidEmpl {
    pub object_id: String,
    pub ein: String,

    /// Name of employee
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/PersonNm",
        line = "Part VIII Line 2 Column A"
    )]
    pub person_nm: Option<String>,

    /// Address of employee
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/USAddress/AddressLine1Txt",
        line = "Part VIII Line 2 Column A"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/USAddress/CityNm",
        line = "Part VIII Line 2 Column A",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/USAddress/StateAbbreviationCd",
        line = "Part VIII Line 2 Column A",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/USAddress/ZIPCd",
        line = "Part VIII Line 2 Column A",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Title
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/TitleTxt",
        line = "Part VIII Line 2 Column B"
    )]
    pub title_txt: Option<String>,

    /// Average hours per week devoted to position
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/AverageHrsPerWkDevotedToPosRt",
        line = "Part VIII Line 2 Column B"
    )]
    pub average_hrs_per_wk_devoted_to_pos_rt: Option<f64>,

    /// Compensation
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/CompensationAmt",
        line = "Part VIII Line 2 Column C"
    )]
    pub compensation_amt: Option<i64>,

    /// Contributions to employee benefit plans
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/EmployeeBenefitsAmt",
        line = "Part VIII Line 2 Column D"
    )]
    pub employee_benefits_amt: Option<i64>,

    /// Expense account and other allowances
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationHighestPaidEmplGrp/ExpenseAccountAmt",
        line = "Part VIII Line 2 Column E"
    )]
    pub expense_account_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_cmpnstnofhghstpdcntrct",
    form = "Form990PF",
    part = "Part VIII",
    description = "Five highest-paid independent contractors for professional services",
    group = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp",
    parent = "return_pf_part_viii"
)]
pub struct CompensationOfHghstPdCntrct {
    pub object_id: String,
    pub ein: String,

    /// Name of contractor (person)
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/PersonNm",
        line = "Part VIII Line 3 Column A"
    )]
    pub person_nm: Option<String>,

    /// Name of contractor (business)
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part VIII Line 3 Column A",
        name = "CmpnstnOfHghstPdCntrct_BsnssNm_BsnssNmLn1Txt"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Address of contractor
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/USAddress/AddressLine1Txt",
        line = "Part VIII Line 3 Column A",
        name = "CmpnstnOfHghstPdCntrct_USAddrss_AddrssLn1Txt"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/USAddress/CityNm",
        line = "Part VIII Line 3 Column A",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/USAddress/StateAbbreviationCd",
        line = "Part VIII Line 3 Column A",
        name = "CmpnstnOfHghstPdCntrct_USAddrss_SttAbbrvtnCd",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/USAddress/ZIPCd",
        line = "Part VIII Line 3 Column A",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Type of service
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/ServiceTypeTxt",
        line = "Part VIII Line 3 Column B"
    )]
    pub service_type_txt: Option<String>,

    /// Compensation
    #[field(
        xpath = "/IRS990PF/OfficerDirTrstKeyEmplInfoGrp/CompensationOfHghstPdCntrctGrp/CompensationAmt",
        line = "Part VIII Line 3 Column C"
    )]
    pub compensation_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_ixa",
    form = "Form990PF",
    part = "Part IX-A",
    description = "Summary of direct charitable activities"
)]
pub struct PartIXA {
    pub object_id: String,
    pub ein: String,

    /// Direct charitable activity 1
    #[field(
        xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Description1Txt",
        line = "Part IX-A Line 1",
        long
    )]
    pub description_1_txt: Option<String>,

    /// Expenses of direct charitable activity 1
    #[field(xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Expenses1Amt", line = "Part IX-A Line 1")]
    pub expenses_1_amt: Option<i64>,

    /// Direct charitable activity 2
    #[field(
        xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Description2Txt",
        line = "Part IX-A Line 2",
        long
    )]
    pub description_2_txt: Option<String>,

    /// Expenses of direct charitable activity 2
    #[field(xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Expenses2Amt", line = "Part IX-A Line 2")]
    pub expenses_2_amt: Option<i64>,

    /// Direct charitable activity 3
    #[field(
        xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Description3Txt",
        line = "Part IX-A Line 3",
        long
    )]
    pub description_3_txt: Option<String>,

    /// Expenses of direct charitable activity 3
    #[field(xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Expenses3Amt", line = "Part IX-A Line 3")]
    pub expenses_3_amt: Option<i64>,

    /// Direct charitable activity 4
    #[field(
        xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Description4Txt",
        line = "Part IX-A Line 4",
        long
    )]
    pub description_4_txt: Option<String>,

    /// Expenses of direct charitable activity 4
    #[field(xpath = "/IRS990PF/SummaryOfDirectChrtblActyGrp/Expenses4Amt", line = "Part IX-A Line 4")]
    pub expenses_4_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_ixb",
    form = "Form990PF",
    part = "Part IX-B",
    description = "Summary of program-related investments"
)]
pub struct PartIXB {
    pub object_id: String,
    pub ein: String,

    /// Program-related investment 1
    #[field(
        xpath = "/IRS990PF/SummaryOfPrgrmRelatedInvstGrp/Description1Txt",
        line = "Part IX-B Line 1",
        long
    )]
    pub description_1_txt: Option<String>,

    /// Amount of program-related investment 1
    #[field(xpath = "/IRS990PF/SummaryOfPrgrmRelatedInvstGrp/Expenses1Amt", line = "Part IX-B Line 1")]
    pub expenses_1_amt: Option<i64>,

    /// Program-related investment 2
    #[field(
        xpath = "/IRS990PF/SummaryOfPrgrmRelatedInvstGrp/Description2Txt",
        line = "Part IX-B Line 2",
        long
    )]
    pub description_2_txt: Option<String>,

    /// Amount of program-related investment 2
    #[field(xpath = "/IRS990PF/SummaryOfPrgrmRelatedInvstGrp/Expenses2Amt", line = "Part IX-B Line 2")]
    pub expenses_2_amt: Option<i64>,

    /// All other program-related investments
    #[field(
        xpath = "/IRS990PF/SummaryOfPrgrmRelatedInvstGrp/AllOtherProgramRltdInvstTotAmt",
        line = "Part IX-B Line 3"
    )]
    pub all_other_program_rltd_invst_tot_amt: Option<i64>,

    /// Total program-related investments
    #[field(xpath = "/IRS990PF/SummaryOfPrgrmRelatedInvstGrp/TotalAmt", line = "Part IX-B Total")]
    pub total_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_x",
    form = "Form990PF",
    part = "Part X",
    description = "Minimum investment return"
)]
pub struct PartX {
    pub object_id: String,
    pub ein: String,

    /// Average monthly fair market value of securities
    #[field(xpath = "/IRS990PF/MinimumInvestmentReturnGrp/AverageMonthlyFMVOfSecAmt", line = "Part X Line 1a")]
    pub average_monthly_fmv_of_sec_amt: Option<i64>,

    /// Total fair market value of assets
    #[field(xpath = "/IRS990PF/MinimumInvestmentReturnGrp/TotalFMVOfUnusedAssetsAmt", line = "Part X Line 1e")]
    pub total_fmv_of_unused_assets_amt: Option<i64>,

    /// Minimum investment return
    #[field(xpath = "/IRS990PF/MinimumInvestmentReturnGrp/MinimumInvestmentReturnAmt", line = "Part X Line 6")]
    pub minimum_investment_return_amt: Option<i64>,

    /// Average of monthly cash balances
    #[field(
        xpath = "/IRS990PF/MinimumInvestmentReturnGrp/AverageMonthlyCashBalancesAmt",
        line = "Part X Line 1b"
    )]
    pub average_monthly_cash_balances_amt: Option<i64>,

    /// Fair market value of all other assets
    #[field(xpath = "/IRS990PF/MinimumInvestmentReturnGrp/FMVAllOtherAssetsAmt", line = "Part X Line 1c")]
    pub fmv_all_other_assets_amt: Option<i64>,

    /// Reduction claimed for blockage or other factors
    #[field(
        xpath = "/IRS990PF/MinimumInvestmentReturnGrp/ReductionClaimedForBlockageAmt",
        line = "Part X Line 1e"
    )]
    pub reduction_claimed_for_blockage_amt: Option<i64>,

    /// Acquisition indebtedness applicable to line 1 assets
    #[field(
        xpath = "/IRS990PF/MinimumInvestmentReturnGrp/AcquisitionIndebtednessAmt",
        line = "Part X Line 2"
    )]
    pub acquisition_indebtedness_amt: Option<i64>,

    /// Line 1d less line 2
    #[field(
        xpath = "/IRS990PF/MinimumInvestmentReturnGrp/AdjustedTotalFMVOfUnusedAstAmt",
        line = "Part X Line 3"
    )]
    pub adjusted_total_fmv_of_unused_ast_amt: Option<i64>,

    /// Cash deemed held for charitable activities
    #[field(xpath = "/IRS990PF/MinimumInvestmentReturnGrp/CashDeemedCharitableAmt", line = "Part X Line 4")]
    pub cash_deemed_charitable_amt: Option<i64>,

    /// Net value of noncharitable-use assets
    #[field(
        xpath = "/IRS990PF/MinimumInvestmentReturnGrp/NetVlNoncharitableAssetsAmt",
        line = "Part X Line 5"
    )]
    pub net_vl_noncharitable_assets_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_xi",
    form = "Form990PF",
    part = "Part XI",
    description = "Distributable amount"
)]
pub struct PartXI {
    pub object_id: String,
    pub ein: String,

    /// Minimum investment return
    #[field(xpath = "/IRS990PF/DistributableAmountGrp/MinimumInvestmentReturnAmt", line = "Part XI Line 1")]
    pub minimum_investment_return_amt: Option<i64>,

    /// Tax on investment income
    #[field(
        xpath = "/IRS990PF/DistributableAmountGrp/TaxBasedOnInvestmentIncomeAmt",
        line = "Part XI Line 2a"
    )]
    pub tax_based_on_investment_income_amt: Option<i64>,

    /// Income tax
    #[field(xpath = "/IRS990PF/DistributableAmountGrp/IncomeTaxAmt", line = "Part XI Line 2b")]
    pub income_tax_amt: Option<i64>,

    /// Total of lines 2a and 2b
    #[field(xpath = "/IRS990PF/DistributableAmountGrp/TotalTaxAmt", line = "Part XI Line 2c")]
    pub total_tax_amt: Option<i64>,

    /// Distributable amount before adjustments
    #[field(xpath = "/IRS990PF/DistributableAmountGrp/DistributableBeforeAdjAmt", line = "Part XI Line 3")]
    pub distributable_before_adj_amt: Option<i64>,

    /// Recoveries of amounts treated as qualifying distributions
    #[field(xpath = "/IRS990PF/DistributableAmountGrp/RecoveriesQlfyDistriAmt", line = "Part XI Line 4")]
    pub recoveries_qlfy_distri_amt: Option<i64>,

    /// Line 3 plus line 4
    #[field(xpath = "/IRS990PF/DistributableAmountGrp/DistributableBeforeDedAmt", line = "Part XI Line 5")]
    pub distributable_before_ded_amt: Option<i64>,

    /// Deduction from distributable amount
    #[field(
        xpath = "/IRS990PF/DistributableAmountGrp/DeductionFromDistributableAmt",
        line = "Part XI Line 6"
    )]
    pub deduction_from_distributable_amt: Option<i64>,

    /// Distributable amount as adjusted
    #[field(xpath = "/IRS990PF/DistributableAmountGrp/DistributableAsAdjustedAmt", line = "Part XI Line 7")]
    pub distributable_as_adjusted_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_xii",
    form = "Form990PF",
    part = "Part XII",
    description = "Qualifying distributions"
)]
pub struct PartXII {
    pub object_id: String,
    pub ein: String,

    /// Expenses, contributions, gifts paid
    #[field(
        xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/ExpensesAndContributionsAmt",
        line = "Part XII Line 1a"
    )]
    pub expenses_and_contributions_amt: Option<i64>,

    /// Program-related investments
    #[field(
        xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/ProgramRelatedInvstTotAmt",
        line = "Part XII Line 1b"
    )]
    pub program_related_invst_tot_amt: Option<i64>,

    /// Amounts paid to acquire assets used for charitable purposes
    #[field(
        xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/AmountsPaidToAcquireAssetsAmt",
        line = "Part XII Line 2"
    )]
    pub amounts_paid_to_acquire_assets_amt: Option<i64>,

    /// Amounts set aside: suitability test
    #[field(xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/SuitabilityTestAmt", line = "Part XII Line 3a")]
    pub suitability_test_amt: Option<i64>,

    /// Amounts set aside: cash distribution test
    #[field(
        xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/CashDistributionTestAmt",
        line = "Part XII Line 3b"
    )]
    pub cash_distribution_test_amt: Option<i64>,

    /// Qualifying distributions
    #[field(
        xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/QualifyingDistributionsAmt",
        line = "Part XII Line 4"
    )]
    pub qualifying_distributions_amt: Option<i64>,

    /// Foundations qualifying for the reduced tax rate on net investment income
    #[field(
        xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/NetInvestmentIncomeTaxAmt",
        line = "Part XII Line 5"
    )]
    pub net_investment_income_tax_amt: Option<i64>,

    /// Adjusted qualifying distributions
    #[field(
        xpath = "/IRS990PF/QualifyingDistriPartXIIGrp/AdjustedQualifyingDistriAmt",
        line = "Part XII Line 6"
    )]
    pub adjusted_qualifying_distri_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_xiii",
    form = "Form990PF",
    part = "Part XIII",
    description = "Undistributed income"
)]
pub struct PartXIII {
    pub object_id: String,
    pub ein: String,

    /// Distributable amount for the year
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/DistributableAsAdjustedAmt",
        line = "Part XIII Line 1 Column D"
    )]
    pub distributable_as_adjusted_amt: Option<i64>,

    /// Undistributed income for the prior year
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/UndistributedIncomePYAmt",
        line = "Part XIII Line 2a Column C"
    )]
    pub undistributed_income_py_amt: Option<i64>,

    /// Undistributed income for earlier years
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/TotalForPriorYearsAmt",
        line = "Part XIII Line 2b Column B"
    )]
    pub total_for_prior_years_amt: Option<i64>,

    /// Excess distributions carryover from year 1
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessDistriCyovYr1Amt",
        line = "Part XIII Line 3 Column A"
    )]
    pub excess_distri_cyov_yr_1_amt: Option<i64>,

    /// Excess distributions carryover from year 2
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessDistriCyovYr2Amt",
        line = "Part XIII Line 3 Column A"
    )]
    pub excess_distri_cyov_yr_2_amt: Option<i64>,

    /// Excess distributions carryover from year 3
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessDistriCyovYr3Amt",
        line = "Part XIII Line 3 Column A"
    )]
    pub excess_distri_cyov_yr_3_amt: Option<i64>,

    /// Excess distributions carryover from year 4
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessDistriCyovYr4Amt",
        line = "Part XIII Line 3 Column A"
    )]
    pub excess_distri_cyov_yr_4_amt: Option<i64>,

    /// Excess distributions carryover from year 5
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessDistriCyovYr5Amt",
        line = "Part XIII Line 3 Column A"
    )]
    pub excess_distri_cyov_yr_5_amt: Option<i64>,

    /// Total excess distributions carryover
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/TotalExcessDistriCyovAmt",
        line = "Part XIII Line 3f Column A"
    )]
    pub total_excess_distri_cyov_amt: Option<i64>,

    /// Qualifying distributions from Part XII line 4
    #[field(xpath = "/IRS990PF/UndistributedIncomeGrp/QlfyDistriPartXIIAmt", line = "Part XIII Line 4")]
    pub qlfy_distri_part_xii_amt: Option<i64>,

    /// Applied to prior year undistributed income
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/AppliedToPYUndistributedIncmAmt",
        line = "Part XIII Line 4a Column C"
    )]
    pub applied_to_py_undistributed_incm_amt: Option<i64>,

    /// Applied to undistributed income of earlier years
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/AppliedToUndistriIncmPrYrAmt",
        line = "Part XIII Line 4b Column B"
    )]
    pub applied_to_undistri_incm_pr_yr_amt: Option<i64>,

    /// Treated as distributions out of corpus
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/TreatedDistriOutOfCorpusAmt",
        line = "Part XIII Line 4c Column A"
    )]
    pub treated_distri_out_of_corpus_amt: Option<i64>,

    /// Applied to the current year distributable amount
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/AppliedToCYDistributableAmt",
        line = "Part XIII Line 4d Column D"
    )]
    pub applied_to_cy_distributable_amt: Option<i64>,

    /// Remaining amount distributed out of corpus
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/RemainingAmtDistriFromCorpusAmt",
        line = "Part XIII Line 4e Column A"
    )]
    pub remaining_amt_distri_from_corpus_amt: Option<i64>,

    /// Excess distributions carryover applied to the current year
    #[field(xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessDistriCyovAppCYAmt", line = "Part XIII Line 5")]
    pub excess_distri_cyov_app_cy_amt: Option<i64>,

    /// Corpus
    #[field(xpath = "/IRS990PF/UndistributedIncomeGrp/CorpusTotalAmt", line = "Part XIII Line 6a Column A")]
    pub corpus_total_amt: Option<i64>,

    /// Prior years' undistributed income
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/PriorYearsUndistriIncmAmt",
        line = "Part XIII Line 6b Column B"
    )]
    pub prior_years_undistri_incm_amt: Option<i64>,

    /// Undistributed income for which a deficiency notice was issued
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/DeficiencyNoticeAmt",
        line = "Part XIII Line 6c Column B"
    )]
    pub deficiency_notice_amt: Option<i64>,

    /// Taxable amount of prior years' undistributed income
    #[field(xpath = "/IRS990PF/UndistributedIncomeGrp/TaxableAmountAmt", line = "Part XIII Line 6d Column B")]
    pub taxable_amount_amt: Option<i64>,

    /// Undistributed income for the prior year remaining
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/UndistriIncmPYTaxableAmt",
        line = "Part XIII Line 6e Column C"
    )]
    pub undistri_incm_py_taxable_amt: Option<i64>,

    /// Undistributed income for the current year
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/UndistributedIncomeCYAmt",
        line = "Part XIII Line 6f Column D"
    )]
    pub undistributed_income_cy_amt: Option<i64>,

    /// Amounts treated as distributions out of corpus
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/CorpusDistributionsRqrAmt",
        line = "Part XIII Line 7 Column A"
    )]
    pub corpus_distributions_rqr_amt: Option<i64>,

    /// Excess distributions carryover not applied
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessNotAppliedYr5Amt",
        line = "Part XIII Line 8 Column A"
    )]
    pub excess_not_applied_yr_5_amt: Option<i64>,

    /// Excess distributions carryover to the next year
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessDistriCyovToNextYrAmt",
        line = "Part XIII Line 9 Column A"
    )]
    pub excess_distri_cyov_to_next_yr_amt: Option<i64>,

    /// Analysis of line 9: excess from year 1
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessFromYear1Amt",
        line = "Part XIII Line 10a Column A"
    )]
    pub excess_from_year_1_amt: Option<i64>,

    /// Analysis of line 9: excess from year 2
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessFromYear2Amt",
        line = "Part XIII Line 10b Column A"
    )]
    pub excess_from_year_2_amt: Option<i64>,

    /// Analysis of line 9: excess from year 3
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessFromYear3Amt",
        line = "Part XIII Line 10c Column A"
    )]
    pub excess_from_year_3_amt: Option<i64>,

    /// Analysis of line 9: excess from year 4
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessFromYear4Amt",
        line = "Part XIII Line 10d Column A"
    )]
    pub excess_from_year_4_amt: Option<i64>,

    /// Analysis of line 9: excess from year 5
    #[field(
        xpath = "/IRS990PF/UndistributedIncomeGrp/ExcessFromYear5Amt",
        line = "Part XIII Line 10e Column A"
    )]
    pub excess_from_year_5_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_xiv",
    form = "Form990PF",
    part = "Part XIV",
    description = "Private operating foundations"
)]
pub struct PartXIV {
    pub object_id: String,
    pub ein: String,

    /// Date of the ruling that the foundation is a private operating foundation
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/RulingEffectiveDt",
        line = "Part XIV Line 1a",
        date
    )]
    pub private_operating_foundations_ruling_effective_dt: Option<String>,

    /// Operating foundation described in section 4942(j)(3)
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/Section4942j3Ind",
        line = "Part XIV Line 1b",
        max_length = 5
    )]
    pub private_operating_foundations_section_4942j3_ind: Option<String>,

    /// Operating foundation described in section 4942(j)(5)
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/Section4942j5Ind",
        line = "Part XIV Line 1b",
        max_length = 5
    )]
    pub private_operating_foundations_section_4942j5_ind: Option<String>,

    /// Lesser of adjusted net income or minimum investment return - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AdjNetIncmLessOrMinInvstRetGrp/TaxYearAmt",
        line = "Part XIV Line 2a"
    )]
    pub adj_net_incm_less_or_min_invst_ret_tax_year_amt: Option<i64>,

    /// Lesser of adjusted net income or minimum investment return - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AdjNetIncmLessOrMinInvstRetGrp/PriorYear1Amt",
        line = "Part XIV Line 2a"
    )]
    pub adj_net_incm_less_or_min_invst_ret_prior_year_1_amt: Option<i64>,

    /// Lesser of adjusted net income or minimum investment return - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AdjNetIncmLessOrMinInvstRetGrp/PriorYear2Amt",
        line = "Part XIV Line 2a"
    )]
    pub adj_net_incm_less_or_min_invst_ret_prior_year_2_amt: Option<i64>,

    /// Lesser of adjusted net income or minimum investment return - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AdjNetIncmLessOrMinInvstRetGrp/PriorYear3Amt",
        line = "Part XIV Line 2a"
    )]
    pub adj_net_incm_less_or_min_invst_ret_prior_year_3_amt: Option<i64>,

    /// Lesser of adjusted net income or minimum investment return - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AdjNetIncmLessOrMinInvstRetGrp/TotalAmt",
        line = "Part XIV Line 2a"
    )]
    pub adj_net_incm_less_or_min_invst_ret_total_amt: Option<i64>,

    /// 85% of line 2a - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/EightyFivePctOfLine2aGrp/TaxYearAmt",
        line = "Part XIV Line 2b"
    )]
    pub eighty_five_pct_of_line_2a_tax_year_amt: Option<i64>,

    /// 85% of line 2a - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/EightyFivePctOfLine2aGrp/PriorYear1Amt",
        line = "Part XIV Line 2b"
    )]
    pub eighty_five_pct_of_line_2a_prior_year_1_amt: Option<i64>,

    /// 85% of line 2a - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/EightyFivePctOfLine2aGrp/PriorYear2Amt",
        line = "Part XIV Line 2b"
    )]
    pub eighty_five_pct_of_line_2a_prior_year_2_amt: Option<i64>,

    /// 85% of line 2a - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/EightyFivePctOfLine2aGrp/PriorYear3Amt",
        line = "Part XIV Line 2b"
    )]
    pub eighty_five_pct_of_line_2a_prior_year_3_amt: Option<i64>,

    /// 85% of line 2a - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/EightyFivePctOfLine2aGrp/TotalAmt",
        line = "Part XIV Line 2b"
    )]
    pub eighty_five_pct_of_line_2a_total_amt: Option<i64>,

    /// Qualifying distributions - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QualifyingDistributionsGrp/TaxYearAmt",
        line = "Part XIV Line 2c"
    )]
    pub qualifying_distributions_tax_year_amt: Option<i64>,

    /// Qualifying distributions - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QualifyingDistributionsGrp/PriorYear1Amt",
        line = "Part XIV Line 2c"
    )]
    pub qualifying_distributions_prior_year_1_amt: Option<i64>,

    /// Qualifying distributions - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QualifyingDistributionsGrp/PriorYear2Amt",
        line = "Part XIV Line 2c"
    )]
    pub qualifying_distributions_prior_year_2_amt: Option<i64>,

    /// Qualifying distributions - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QualifyingDistributionsGrp/PriorYear3Amt",
        line = "Part XIV Line 2c"
    )]
    pub qualifying_distributions_prior_year_3_amt: Option<i64>,

    /// Qualifying distributions - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QualifyingDistributionsGrp/TotalAmt",
        line = "Part XIV Line 2c"
    )]
    pub qualifying_distributions_total_amt: Option<i64>,

    /// Amounts included in line 2c not used directly for exempt activities - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AmtsIncldLine2cNotUsedGrp/TaxYearAmt",
        line = "Part XIV Line 2d"
    )]
    pub amts_incld_line_2c_not_used_tax_year_amt: Option<i64>,

    /// Amounts included in line 2c not used directly for exempt activities - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AmtsIncldLine2cNotUsedGrp/PriorYear1Amt",
        line = "Part XIV Line 2d"
    )]
    pub amts_incld_line_2c_not_used_prior_year_1_amt: Option<i64>,

    /// Amounts included in line 2c not used directly for exempt activities - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AmtsIncldLine2cNotUsedGrp/PriorYear2Amt",
        line = "Part XIV Line 2d"
    )]
    pub amts_incld_line_2c_not_used_prior_year_2_amt: Option<i64>,

    /// Amounts included in line 2c not used directly for exempt activities - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AmtsIncldLine2cNotUsedGrp/PriorYear3Amt",
        line = "Part XIV Line 2d"
    )]
    pub amts_incld_line_2c_not_used_prior_year_3_amt: Option<i64>,

    /// Amounts included in line 2c not used directly for exempt activities - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/AmtsIncldLine2cNotUsedGrp/TotalAmt",
        line = "Part XIV Line 2d"
    )]
    pub amts_incld_line_2c_not_used_total_amt: Option<i64>,

    /// Qualifying distributions made directly for exempt activities - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QlfyDistriMadeDirectlyGrp/TaxYearAmt",
        line = "Part XIV Line 2e"
    )]
    pub qlfy_distri_made_directly_tax_year_amt: Option<i64>,

    /// Qualifying distributions made directly for exempt activities - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QlfyDistriMadeDirectlyGrp/PriorYear1Amt",
        line = "Part XIV Line 2e"
    )]
    pub qlfy_distri_made_directly_prior_year_1_amt: Option<i64>,

    /// Qualifying distributions made directly for exempt activities - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QlfyDistriMadeDirectlyGrp/PriorYear2Amt",
        line = "Part XIV Line 2e"
    )]
    pub qlfy_distri_made_directly_prior_year_2_amt: Option<i64>,

    /// Qualifying distributions made directly for exempt activities - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QlfyDistriMadeDirectlyGrp/PriorYear3Amt",
        line = "Part XIV Line 2e"
    )]
    pub qlfy_distri_made_directly_prior_year_3_amt: Option<i64>,

    /// Qualifying distributions made directly for exempt activities - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/QlfyDistriMadeDirectlyGrp/TotalAmt",
        line = "Part XIV Line 2e"
    )]
    pub qlfy_distri_made_directly_total_amt: Option<i64>,

    /// Assets test: value of all assets - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueOfAllAssetsGrp/TaxYearAmt",
        line = "Part XIV Line 3a(1)"
    )]
    pub value_of_all_assets_tax_year_amt: Option<i64>,

    /// Assets test: value of all assets - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueOfAllAssetsGrp/PriorYear1Amt",
        line = "Part XIV Line 3a(1)"
    )]
    pub value_of_all_assets_prior_year_1_amt: Option<i64>,

    /// Assets test: value of all assets - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueOfAllAssetsGrp/PriorYear2Amt",
        line = "Part XIV Line 3a(1)"
    )]
    pub value_of_all_assets_prior_year_2_amt: Option<i64>,

    /// Assets test: value of all assets - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueOfAllAssetsGrp/PriorYear3Amt",
        line = "Part XIV Line 3a(1)"
    )]
    pub value_of_all_assets_prior_year_3_amt: Option<i64>,

    /// Assets test: value of all assets - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueOfAllAssetsGrp/TotalAmt",
        line = "Part XIV Line 3a(1)"
    )]
    pub value_of_all_assets_total_amt: Option<i64>,

    /// Assets test: value of assets qualifying under section 4942(j)(3)(B)(i) - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueAssetsQualifyingGrp/TaxYearAmt",
        line = "Part XIV Line 3a(2)"
    )]
    pub value_assets_qualifying_tax_year_amt: Option<i64>,

    /// Assets test: value of assets qualifying under section 4942(j)(3)(B)(i) - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueAssetsQualifyingGrp/PriorYear1Amt",
        line = "Part XIV Line 3a(2)"
    )]
    pub value_assets_qualifying_prior_year_1_amt: Option<i64>,

    /// Assets test: value of assets qualifying under section 4942(j)(3)(B)(i) - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueAssetsQualifyingGrp/PriorYear2Amt",
        line = "Part XIV Line 3a(2)"
    )]
    pub value_assets_qualifying_prior_year_2_amt: Option<i64>,

    /// Assets test: value of assets qualifying under section 4942(j)(3)(B)(i) - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueAssetsQualifyingGrp/PriorYear3Amt",
        line = "Part XIV Line 3a(2)"
    )]
    pub value_assets_qualifying_prior_year_3_amt: Option<i64>,

    /// Assets test: value of assets qualifying under section 4942(j)(3)(B)(i) - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/ValueAssetsQualifyingGrp/TotalAmt",
        line = "Part XIV Line 3a(2)"
    )]
    pub value_assets_qualifying_total_amt: Option<i64>,

    /// Endowment test: 2/3 of minimum investment return - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TwoThirdsMinInvstRetGrp/TaxYearAmt",
        line = "Part XIV Line 3b"
    )]
    pub two_thirds_min_invst_ret_tax_year_amt: Option<i64>,

    /// Endowment test: 2/3 of minimum investment return - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TwoThirdsMinInvstRetGrp/PriorYear1Amt",
        line = "Part XIV Line 3b"
    )]
    pub two_thirds_min_invst_ret_prior_year_1_amt: Option<i64>,

    /// Endowment test: 2/3 of minimum investment return - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TwoThirdsMinInvstRetGrp/PriorYear2Amt",
        line = "Part XIV Line 3b"
    )]
    pub two_thirds_min_invst_ret_prior_year_2_amt: Option<i64>,

    /// Endowment test: 2/3 of minimum investment return - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TwoThirdsMinInvstRetGrp/PriorYear3Amt",
        line = "Part XIV Line 3b"
    )]
    pub two_thirds_min_invst_ret_prior_year_3_amt: Option<i64>,

    /// Endowment test: 2/3 of minimum investment return - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TwoThirdsMinInvstRetGrp/TotalAmt",
        line = "Part XIV Line 3b"
    )]
    pub two_thirds_min_invst_ret_total_amt: Option<i64>,

    /// Support test: total support other than gross investment income - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TotalSupportGrp/TaxYearAmt",
        line = "Part XIV Line 3c(1)"
    )]
    pub total_support_tax_year_amt: Option<i64>,

    /// Support test: total support other than gross investment income - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TotalSupportGrp/PriorYear1Amt",
        line = "Part XIV Line 3c(1)"
    )]
    pub total_support_prior_year_1_amt: Option<i64>,

    /// Support test: total support other than gross investment income - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TotalSupportGrp/PriorYear2Amt",
        line = "Part XIV Line 3c(1)"
    )]
    pub total_support_prior_year_2_amt: Option<i64>,

    /// Support test: total support other than gross investment income - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TotalSupportGrp/PriorYear3Amt",
        line = "Part XIV Line 3c(1)"
    )]
    pub total_support_prior_year_3_amt: Option<i64>,

    /// Support test: total support other than gross investment income - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/TotalSupportGrp/TotalAmt",
        line = "Part XIV Line 3c(1)"
    )]
    pub total_support_total_amt: Option<i64>,

    /// Support test: support from the general public and 5 or more exempt organizations - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/PublicAndExemptOrgSupportGrp/TaxYearAmt",
        line = "Part XIV Line 3c(2)"
    )]
    pub public_and_exempt_org_support_tax_year_amt: Option<i64>,

    /// Support test: support from the general public and 5 or more exempt organizations - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/PublicAndExemptOrgSupportGrp/PriorYear1Amt",
        line = "Part XIV Line 3c(2)"
    )]
    pub public_and_exempt_org_support_prior_year_1_amt: Option<i64>,

    /// Support test: support from the general public and 5 or more exempt organizations - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/PublicAndExemptOrgSupportGrp/PriorYear2Amt",
        line = "Part XIV Line 3c(2)"
    )]
    pub public_and_exempt_org_support_prior_year_2_amt: Option<i64>,

    /// Support test: support from the general public and 5 or more exempt organizations - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/PublicAndExemptOrgSupportGrp/PriorYear3Amt",
        line = "Part XIV Line 3c(2)"
    )]
    pub public_and_exempt_org_support_prior_year_3_amt: Option<i64>,

    /// Support test: support from the general public and 5 or more exempt organizations - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/PublicAndExemptOrgSupportGrp/TotalAmt",
        line = "Part XIV Line 3c(2)"
    )]
    pub public_and_exempt_org_support_total_amt: Option<i64>,

    /// Support test: largest amount of support from an exempt organization - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/LargestAmtSupportExemptOrgGrp/TaxYearAmt",
        line = "Part XIV Line 3c(3)"
    )]
    pub largest_amt_support_exempt_org_tax_year_amt: Option<i64>,

    /// Support test: largest amount of support from an exempt organization - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/LargestAmtSupportExemptOrgGrp/PriorYear1Amt",
        line = "Part XIV Line 3c(3)"
    )]
    pub largest_amt_support_exempt_org_prior_year_1_amt: Option<i64>,

    /// Support test: largest amount of support from an exempt organization - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/LargestAmtSupportExemptOrgGrp/PriorYear2Amt",
        line = "Part XIV Line 3c(3)"
    )]
    pub largest_amt_support_exempt_org_prior_year_2_amt: Option<i64>,

    /// Support test: largest amount of support from an exempt organization - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/LargestAmtSupportExemptOrgGrp/PriorYear3Amt",
        line = "Part XIV Line 3c(3)"
    )]
    pub largest_amt_support_exempt_org_prior_year_3_amt: Option<i64>,

    /// Support test: largest amount of support from an exempt organization - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/LargestAmtSupportExemptOrgGrp/TotalAmt",
        line = "Part XIV Line 3c(3)"
    )]
    pub largest_amt_support_exempt_org_total_amt: Option<i64>,

    /// Support test: gross investment income - tax year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/GrossInvestmentIncomeGrp/TaxYearAmt",
        line = "Part XIV Line 3c(4)"
    )]
    pub gross_investment_income_tax_year_amt: Option<i64>,

    /// Support test: gross investment income - first prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/GrossInvestmentIncomeGrp/PriorYear1Amt",
        line = "Part XIV Line 3c(4)"
    )]
    pub gross_investment_income_prior_year_1_amt: Option<i64>,

    /// Support test: gross investment income - second prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/GrossInvestmentIncomeGrp/PriorYear2Amt",
        line = "Part XIV Line 3c(4)"
    )]
    pub gross_investment_income_prior_year_2_amt: Option<i64>,

    /// Support test: gross investment income - third prior year
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/GrossInvestmentIncomeGrp/PriorYear3Amt",
        line = "Part XIV Line 3c(4)"
    )]
    pub gross_investment_income_prior_year_3_amt: Option<i64>,

    /// Support test: gross investment income - total
    #[field(
        xpath = "/IRS990PF/PrivateOperatingFoundationsGrp/GrossInvestmentIncomeGrp/TotalAmt",
        line = "Part XIV Line 3c(4)"
    )]
    pub gross_investment_income_total_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_xv",
    form = "Form990PF",
    part = "Part XV",
    description = "Supplementary information: grants and contributions totals"
)]
pub struct PartXV {
    pub object_id: String,
    pub ein: String,

    /// Only makes contributions to preselected organizations
    #[field(xpath = "/IRS990PF/SupplementaryInformationGrp/OnlyContriToPreselectedInd", line = "Part XV Line 2", max_length = 5)]
    pub only_contri_to_preselected_ind: Option<String>,

    /// Total grants and contributions paid during the year
    #[field(xpath = "/IRS990PF/SupplementaryInformationGrp/TotalGrantOrContriPdDurYrAmt", line = "Part XV Line 3a")]
    pub total_grant_or_contri_pd_dur_yr_amt: Option<i64>,

    /// Total grants and contributions approved for future payment
    #[field(xpath = "/IRS990PF/SupplementaryInformationGrp/TotalGrantOrContriApprvFutAmt", line = "Part XV Line 3b")]
    pub total_grant_or_contri_apprv_fut_amt: Option<i64>,

    /// Managers who contributed more than 2% of total contributions
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/FoundationManagers2PctTxt",
        line = "Part XV Line 1a",
        long
    )]
    pub foundation_managers_2_pct_txt: Option<String>,

    /// Managers who own 10% or more of a corporation or partnership
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/FoundationManagers10PctTxt",
        line = "Part XV Line 1b",
        long
    )]
    pub foundation_managers_10_pct_txt: Option<String>,

    /// Total grants and contributions
    #[field(xpath = "/IRS990PF/SupplementaryInformationGrp/TotalGrantOrContriAmt", line = "Part XV Line 3")]
    pub total_grant_or_contri_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_grntorcntrbtnpddryr",
    form = "Form990PF",
    part = "Part XV",
    description = "Grants and contributions paid during the year",
    group = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp",
    parent = "return_pf_part_xv"
)]
pub struct GrantOrContributionPdDurYr {
    pub object_id: String,
    pub ein: String,

    /// Recipient name (person)
    #[field(xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientPersonNm", line = "Part XV Line 3a")]
    pub recipient_person_nm: Option<String>,

    /// Recipient name (business)
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientBusinessName/BusinessNameLine1Txt",
        line = "Part XV Line 3a"
    )]
    pub recipient_business_name_txt: Option<String>,

    /// Recipient city
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientUSAddress/CityNm",
        line = "Part XV Line 3a",
        max_length = 22
    )]
    pub recipient_city_nm: Option<String>,

    /// Recipient state
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientUSAddress/StateAbbreviationCd",
        line = "Part XV Line 3a",
        max_length = 2
    )]
    pub recipient_state_cd: Option<String>,

    /// Foundation status of recipient
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientFoundationStatusTxt",
        line = "Part XV Line 3a"
    )]
    pub recipient_foundation_status_txt: Option<String>,

    /// Purpose of grant or contribution
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/GrantOrContributionPurposeTxt",
        line = "Part XV Line 3a",
        long
    )]
    pub grant_or_contribution_purpose_txt: Option<String>,

    /// Amount
    #[field(xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/Amt", line = "Part XV Line 3a")]
    pub amt: Option<i64>,

    /// Recipient name (business), second line
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientBusinessName/BusinessNameLine2Txt",
        line = "Part XV Line 3a"
    )]
    pub business_name_line_2_txt: Option<String>,

    /// Recipient address
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientUSAddress/AddressLine1Txt",
        line = "Part XV Line 3a"
    )]
    pub address_line_1_txt: Option<String>,

    /// Recipient ZIP code
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientUSAddress/ZIPCd",
        line = "Part XV Line 3a",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Recipient foreign address
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientForeignAddress/AddressLine1Txt",
        line = "Part XV Line 3a",
        name = "GrntOrCntrbtnPdDrYr_RcpntFrgnAddrss_AddrssLn1Txt"
    )]
    pub recipient_foreign_address_address_line_1_txt: Option<String>,

    /// Recipient foreign city
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientForeignAddress/CityNm",
        line = "Part XV Line 3a"
    )]
    pub city_nm: Option<String>,

    /// Recipient country
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientForeignAddress/CountryCd",
        line = "Part XV Line 3a",
        max_length = 2
    )]
    pub country_cd: Option<String>,

    /// Relationship to any foundation manager or substantial contributor
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContributionPdDurYrGrp/RecipientRelationshipTxt",
        line = "Part XV Line 3a"
    )]
    pub recipient_relationship_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_applctnsbmssninf",
    form = "Form990PF",
    part = "Part XV",
    description = "Grant, gift, loan, scholarship programs: application information",
    group = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp",
    parent = "return_pf_part_xv"
)]
pub struct ApplicationSubmissionInfo {
    pub object_id: String,
    pub ein: String,

    /// Person to whom applications are addressed
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RecipientPersonNm",
        line = "Part XV Line 2a"
    )]
    pub recipient_person_nm: Option<String>,

    /// Address for applications
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RecipientUSAddress/AddressLine1Txt",
        line = "Part XV Line 2a"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RecipientUSAddress/CityNm",
        line = "Part XV Line 2a",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RecipientUSAddress/StateAbbreviationCd",
        line = "Part XV Line 2a",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RecipientUSAddress/ZIPCd",
        line = "Part XV Line 2a",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Telephone number
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RecipientPhoneNum",
        line = "Part XV Line 2a",
        max_length = 20
    )]
    pub recipient_phone_num: Option<String>,

    /// Email address
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RecipientEmailAddressTxt",
        line = "Part XV Line 2a"
    )]
    pub recipient_email_address_txt: Option<String>,

    /// Form of applications and information to include
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/FormAndInfoAndMaterialsTxt",
        line = "Part XV Line 2b",
        long
    )]
    pub form_and_info_and_materials_txt: Option<String>,

    /// Submission deadlines
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/SubmissionDeadlinesTxt",
        line = "Part XV Line 2c",
        long
    )]
    pub submission_deadlines_txt: Option<String>,

    /// Restrictions or limitations on awards
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/ApplicationSubmissionInfoGrp/RestrictionsOnAwardsTxt",
        line = "Part XV Line 2d",
        long
    )]
    pub restrictions_on_awards_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_grntorcntrapprvfrft",
    form = "Form990PF",
    part = "Part XV",
    description = "Grants and contributions approved for future payment",
    group = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp",
    parent = "return_pf_part_xv"
)]
pub struct GrantOrContriApprvForFut {
    pub object_id: String,
    pub ein: String,

    /// Recipient name (person)
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientPersonNm",
        line = "Part XV Line 3b"
    )]
    pub recipient_person_nm: Option<String>,

    /// Recipient name (business)
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientBusinessName/BusinessNameLine1Txt",
        line = "Part XV Line 3b"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Recipient address
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientUSAddress/AddressLine1Txt",
        line = "Part XV Line 3b"
    )]
    pub address_line_1_txt: Option<String>,

    /// Recipient city
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientUSAddress/CityNm",
        line = "Part XV Line 3b",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// Recipient state
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientUSAddress/StateAbbreviationCd",
        line = "Part XV Line 3b",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// Recipient ZIP code
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientUSAddress/ZIPCd",
        line = "Part XV Line 3b",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Relationship to any foundation manager or substantial contributor
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientRelationshipTxt",
        line = "Part XV Line 3b"
    )]
    pub recipient_relationship_txt: Option<String>,

    /// Foundation status of recipient
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/RecipientFoundationStatusTxt",
        line = "Part XV Line 3b"
    )]
    pub recipient_foundation_status_txt: Option<String>,

    /// Purpose of grant or contribution
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/GrantOrContributionPurposeTxt",
        line = "Part XV Line 3b",
        long
    )]
    pub grant_or_contribution_purpose_txt: Option<String>,

    /// Amount
    #[field(
        xpath = "/IRS990PF/SupplementaryInformationGrp/GrantOrContriApprvForFutGrp/Amt",
        line = "Part XV Line 3b"
    )]
    pub amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_xvia",
    form = "Form990PF",
    part = "Part XVI-A",
    description = "Analysis of income-producing activities"
)]
pub struct PartXVIA {
    pub object_id: String,
    pub ein: String,

    /// Fees and contracts from government agencies - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/FeesAndContractsGovAgenciesGrp/BusinessCd",
        line = "Part XVI-A Line 1g Column A",
        name = "FsAndCntrctsGvAgncs_BsnssCd",
        max_length = 6
    )]
    pub fees_and_contracts_gov_agencies_business_cd: Option<String>,

    /// Fees and contracts from government agencies - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/FeesAndContractsGovAgenciesGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 1g Column B",
        name = "FsAndCntrctsGvAgncs_UnrltdBsnssTxblIncmAmt"
    )]
    pub fees_and_contracts_gov_agencies_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Fees and contracts from government agencies - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/FeesAndContractsGovAgenciesGrp/ExclusionCd",
        line = "Part XVI-A Line 1g Column C",
        name = "FsAndCntrctsGvAgncs_ExclsnCd",
        max_length = 6
    )]
    pub fees_and_contracts_gov_agencies_exclusion_cd: Option<String>,

    /// Fees and contracts from government agencies - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/FeesAndContractsGovAgenciesGrp/ExclusionAmt",
        line = "Part XVI-A Line 1g Column D",
        name = "FsAndCntrctsGvAgncs_ExclsnAmt"
    )]
    pub fees_and_contracts_gov_agencies_exclusion_amt: Option<i64>,

    /// Fees and contracts from government agencies - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/FeesAndContractsGovAgenciesGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 1g Column E",
        name = "FsAndCntrctsGvAgncs_RltdOrExmptFnctnIncmAmt"
    )]
    pub fees_and_contracts_gov_agencies_related_or_exempt_function_incm_amt: Option<i64>,

    /// Membership dues and assessments - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/MembershipDuesAndAssessmentsGrp/BusinessCd",
        line = "Part XVI-A Line 2 Column A",
        name = "MmbrshpDsAndAssssmnts_BsnssCd",
        max_length = 6
    )]
    pub membership_dues_and_assessments_business_cd: Option<String>,

    /// Membership dues and assessments - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/MembershipDuesAndAssessmentsGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 2 Column B",
        name = "MmbrshpDsAndAssssmnts_UnrltdBsnssTxblIncmAmt"
    )]
    pub membership_dues_and_assessments_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Membership dues and assessments - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/MembershipDuesAndAssessmentsGrp/ExclusionCd",
        line = "Part XVI-A Line 2 Column C",
        name = "MmbrshpDsAndAssssmnts_ExclsnCd",
        max_length = 6
    )]
    pub membership_dues_and_assessments_exclusion_cd: Option<String>,

    /// Membership dues and assessments - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/MembershipDuesAndAssessmentsGrp/ExclusionAmt",
        line = "Part XVI-A Line 2 Column D",
        name = "MmbrshpDsAndAssssmnts_ExclsnAmt"
    )]
    pub membership_dues_and_assessments_exclusion_amt: Option<i64>,

    /// Membership dues and assessments - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/MembershipDuesAndAssessmentsGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 2 Column E",
        name = "MmbrshpDsAndAssssmnts_RltdOrExmptFnctnIncmAmt"
    )]
    pub membership_dues_and_assessments_related_or_exempt_function_incm_amt: Option<i64>,

    /// Interest on savings and temporary cash investments - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/InterestOnSavingsGrp/BusinessCd",
        line = "Part XVI-A Line 3 Column A",
        name = "IntrstOnSvngs_BsnssCd",
        max_length = 6
    )]
    pub interest_on_savings_business_cd: Option<String>,

    /// Interest on savings and temporary cash investments - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/InterestOnSavingsGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 3 Column B",
        name = "IntrstOnSvngs_UnrltdBsnssTxblIncmAmt"
    )]
    pub interest_on_savings_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Interest on savings and temporary cash investments - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/InterestOnSavingsGrp/ExclusionCd",
        line = "Part XVI-A Line 3 Column C",
        name = "IntrstOnSvngs_ExclsnCd",
        max_length = 6
    )]
    pub interest_on_savings_exclusion_cd: Option<String>,

    /// Interest on savings and temporary cash investments - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/InterestOnSavingsGrp/ExclusionAmt",
        line = "Part XVI-A Line 3 Column D",
        name = "IntrstOnSvngs_ExclsnAmt"
    )]
    pub interest_on_savings_exclusion_amt: Option<i64>,

    /// Interest on savings and temporary cash investments - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/InterestOnSavingsGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 3 Column E",
        name = "IntrstOnSvngs_RltdOrExmptFnctnIncmAmt"
    )]
    pub interest_on_savings_related_or_exempt_function_incm_amt: Option<i64>,

    /// Dividends and interest from securities - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/DividendsAndInterestFromSecGrp/BusinessCd",
        line = "Part XVI-A Line 4 Column A",
        name = "DvdndsAndIntrstFrmSc_BsnssCd",
        max_length = 6
    )]
    pub dividends_and_interest_from_sec_business_cd: Option<String>,

    /// Dividends and interest from securities - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/DividendsAndInterestFromSecGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 4 Column B",
        name = "DvdndsAndIntrstFrmSc_UnrltdBsnssTxblIncmAmt"
    )]
    pub dividends_and_interest_from_sec_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Dividends and interest from securities - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/DividendsAndInterestFromSecGrp/ExclusionCd",
        line = "Part XVI-A Line 4 Column C",
        name = "DvdndsAndIntrstFrmSc_ExclsnCd",
        max_length = 6
    )]
    pub dividends_and_interest_from_sec_exclusion_cd: Option<String>,

    /// Dividends and interest from securities - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/DividendsAndInterestFromSecGrp/ExclusionAmt",
        line = "Part XVI-A Line 4 Column D",
        name = "DvdndsAndIntrstFrmSc_ExclsnAmt"
    )]
    pub dividends_and_interest_from_sec_exclusion_amt: Option<i64>,

    /// Dividends and interest from securities - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/DividendsAndInterestFromSecGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 4 Column E",
        name = "DvdndsAndIntrstFrmSc_RltdOrExmptFnctnIncmAmt"
    )]
    pub dividends_and_interest_from_sec_related_or_exempt_function_incm_amt: Option<i64>,

    /// Net rental income from real estate - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncomeOrLossGrp/BusinessCd",
        line = "Part XVI-A Line 5 Column A",
        name = "NtRntlIncmOrLss_BsnssCd",
        max_length = 6
    )]
    pub net_rental_income_or_loss_business_cd: Option<String>,

    /// Net rental income from real estate - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncomeOrLossGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 5 Column B",
        name = "NtRntlIncmOrLss_UnrltdBsnssTxblIncmAmt"
    )]
    pub net_rental_income_or_loss_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Net rental income from real estate - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncomeOrLossGrp/ExclusionCd",
        line = "Part XVI-A Line 5 Column C",
        name = "NtRntlIncmOrLss_ExclsnCd",
        max_length = 6
    )]
    pub net_rental_income_or_loss_exclusion_cd: Option<String>,

    /// Net rental income from real estate - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncomeOrLossGrp/ExclusionAmt",
        line = "Part XVI-A Line 5 Column D",
        name = "NtRntlIncmOrLss_ExclsnAmt"
    )]
    pub net_rental_income_or_loss_exclusion_amt: Option<i64>,

    /// Net rental income from real estate - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncomeOrLossGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 5 Column E",
        name = "NtRntlIncmOrLss_RltdOrExmptFnctnIncmAmt"
    )]
    pub net_rental_income_or_loss_related_or_exempt_function_incm_amt: Option<i64>,

    /// Net rental income from personal property - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncmOrLossPrsnlPropGrp/BusinessCd",
        line = "Part XVI-A Line 6 Column A",
        name = "NtRntlIncmOrLssPrsnlPrp_BsnssCd",
        max_length = 6
    )]
    pub net_rental_incm_or_loss_prsnl_prop_business_cd: Option<String>,

    /// Net rental income from personal property - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncmOrLossPrsnlPropGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 6 Column B",
        name = "NtRntlIncmOrLssPrsnlPrp_UnrltdBsnssTxblIncmAmt"
    )]
    pub net_rental_incm_or_loss_prsnl_prop_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Net rental income from personal property - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncmOrLossPrsnlPropGrp/ExclusionCd",
        line = "Part XVI-A Line 6 Column C",
        name = "NtRntlIncmOrLssPrsnlPrp_ExclsnCd",
        max_length = 6
    )]
    pub net_rental_incm_or_loss_prsnl_prop_exclusion_cd: Option<String>,

    /// Net rental income from personal property - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncmOrLossPrsnlPropGrp/ExclusionAmt",
        line = "Part XVI-A Line 6 Column D",
        name = "NtRntlIncmOrLssPrsnlPrp_ExclsnAmt"
    )]
    pub net_rental_incm_or_loss_prsnl_prop_exclusion_amt: Option<i64>,

    /// Net rental income from personal property - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetRentalIncmOrLossPrsnlPropGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 6 Column E",
        name = "NtRntlIncmOrLssPrsnlPrp_RltdOrExmptFnctnIncmAmt"
    )]
    pub net_rental_incm_or_loss_prsnl_prop_related_or_exempt_function_incm_amt: Option<i64>,

    /// Other investment income - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherInvestmentIncomeGrp/BusinessCd",
        line = "Part XVI-A Line 7 Column A",
        name = "OthrInvstmntIncm_BsnssCd",
        max_length = 6
    )]
    pub other_investment_income_business_cd: Option<String>,

    /// Other investment income - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherInvestmentIncomeGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 7 Column B",
        name = "OthrInvstmntIncm_UnrltdBsnssTxblIncmAmt"
    )]
    pub other_investment_income_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Other investment income - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherInvestmentIncomeGrp/ExclusionCd",
        line = "Part XVI-A Line 7 Column C",
        name = "OthrInvstmntIncm_ExclsnCd",
        max_length = 6
    )]
    pub other_investment_income_exclusion_cd: Option<String>,

    /// Other investment income - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherInvestmentIncomeGrp/ExclusionAmt",
        line = "Part XVI-A Line 7 Column D",
        name = "OthrInvstmntIncm_ExclsnAmt"
    )]
    pub other_investment_income_exclusion_amt: Option<i64>,

    /// Other investment income - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherInvestmentIncomeGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 7 Column E",
        name = "OthrInvstmntIncm_RltdOrExmptFnctnIncmAmt"
    )]
    pub other_investment_income_related_or_exempt_function_incm_amt: Option<i64>,

    /// Gain or loss from sales of assets other than inventory - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GainOrLossSalesOtherAssetsGrp/BusinessCd",
        line = "Part XVI-A Line 8 Column A",
        name = "GnOrLssSlsOthrAssts_BsnssCd",
        max_length = 6
    )]
    pub gain_or_loss_sales_other_assets_business_cd: Option<String>,

    /// Gain or loss from sales of assets other than inventory - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GainOrLossSalesOtherAssetsGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 8 Column B",
        name = "GnOrLssSlsOthrAssts_UnrltdBsnssTxblIncmAmt"
    )]
    pub gain_or_loss_sales_other_assets_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Gain or loss from sales of assets other than inventory - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GainOrLossSalesOtherAssetsGrp/ExclusionCd",
        line = "Part XVI-A Line 8 Column C",
        name = "GnOrLssSlsOthrAssts_ExclsnCd",
        max_length = 6
    )]
    pub gain_or_loss_sales_other_assets_exclusion_cd: Option<String>,

    /// Gain or loss from sales of assets other than inventory - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GainOrLossSalesOtherAssetsGrp/ExclusionAmt",
        line = "Part XVI-A Line 8 Column D",
        name = "GnOrLssSlsOthrAssts_ExclsnAmt"
    )]
    pub gain_or_loss_sales_other_assets_exclusion_amt: Option<i64>,

    /// Gain or loss from sales of assets other than inventory - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GainOrLossSalesOtherAssetsGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 8 Column E",
        name = "GnOrLssSlsOthrAssts_RltdOrExmptFnctnIncmAmt"
    )]
    pub gain_or_loss_sales_other_assets_related_or_exempt_function_incm_amt: Option<i64>,

    /// Net income or loss from special events - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetIncomeOrLossSpecialEventsGrp/BusinessCd",
        line = "Part XVI-A Line 9 Column A",
        name = "NtIncmOrLssSpclEvnts_BsnssCd",
        max_length = 6
    )]
    pub net_income_or_loss_special_events_business_cd: Option<String>,

    /// Net income or loss from special events - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetIncomeOrLossSpecialEventsGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 9 Column B",
        name = "NtIncmOrLssSpclEvnts_UnrltdBsnssTxblIncmAmt"
    )]
    pub net_income_or_loss_special_events_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Net income or loss from special events - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetIncomeOrLossSpecialEventsGrp/ExclusionCd",
        line = "Part XVI-A Line 9 Column C",
        name = "NtIncmOrLssSpclEvnts_ExclsnCd",
        max_length = 6
    )]
    pub net_income_or_loss_special_events_exclusion_cd: Option<String>,

    /// Net income or loss from special events - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetIncomeOrLossSpecialEventsGrp/ExclusionAmt",
        line = "Part XVI-A Line 9 Column D",
        name = "NtIncmOrLssSpclEvnts_ExclsnAmt"
    )]
    pub net_income_or_loss_special_events_exclusion_amt: Option<i64>,

    /// Net income or loss from special events - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/NetIncomeOrLossSpecialEventsGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 9 Column E",
        name = "NtIncmOrLssSpclEvnts_RltdOrExmptFnctnIncmAmt"
    )]
    pub net_income_or_loss_special_events_related_or_exempt_function_incm_amt: Option<i64>,

    /// Gross profit or loss from sales of inventory - business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GrossProfitOrLossSalesOfInvntryGrp/BusinessCd",
        line = "Part XVI-A Line 10 Column A",
        name = "GrssPrftOrLssSlsOfInvntry_BsnssCd",
        max_length = 6
    )]
    pub gross_profit_or_loss_sales_of_invntry_business_cd: Option<String>,

    /// Gross profit or loss from sales of inventory - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GrossProfitOrLossSalesOfInvntryGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 10 Column B",
        name = "GrssPrftOrLssSlsOfInvntry_UnrltdBsnssTxblIncmAmt"
    )]
    pub gross_profit_or_loss_sales_of_invntry_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Gross profit or loss from sales of inventory - exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GrossProfitOrLossSalesOfInvntryGrp/ExclusionCd",
        line = "Part XVI-A Line 10 Column C",
        name = "GrssPrftOrLssSlsOfInvntry_ExclsnCd",
        max_length = 6
    )]
    pub gross_profit_or_loss_sales_of_invntry_exclusion_cd: Option<String>,

    /// Gross profit or loss from sales of inventory - amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GrossProfitOrLossSalesOfInvntryGrp/ExclusionAmt",
        line = "Part XVI-A Line 10 Column D",
        name = "GrssPrftOrLssSlsOfInvntry_ExclsnAmt"
    )]
    pub gross_profit_or_loss_sales_of_invntry_exclusion_amt: Option<i64>,

    /// Gross profit or loss from sales of inventory - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/GrossProfitOrLossSalesOfInvntryGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 10 Column E",
        name = "GrssPrftOrLssSlsOfInvntry_RltdOrExmptFnctnIncmAmt"
    )]
    pub gross_profit_or_loss_sales_of_invntry_related_or_exempt_function_incm_amt: Option<i64>,

    /// Subtotal - unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/SubtotalsIncmProducingActyGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 12 Column B",
        name = "SbttlsIncmPrdcngActy_UnrltdBsnssTxblIncmAmt"
    )]
    pub subtotals_incm_producing_acty_unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Subtotal - amount excluded
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/SubtotalsIncmProducingActyGrp/ExclusionAmt",
        line = "Part XVI-A Line 12 Column D",
        name = "SbttlsIncmPrdcngActy_ExclsnAmt"
    )]
    pub subtotals_incm_producing_acty_exclusion_amt: Option<i64>,

    /// Subtotal - related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/SubtotalsIncmProducingActyGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 12 Column E",
        name = "SbttlsIncmPrdcngActy_RltdOrExmptFnctnIncmAmt"
    )]
    pub subtotals_incm_producing_acty_related_or_exempt_function_incm_amt: Option<i64>,

    /// Total income-producing activities
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/TotalIncomeProducingActyAmt",
        line = "Part XVI-A Line 13"
    )]
    pub total_income_producing_acty_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_prgrmsrvcrvn",
    form = "Form990PF",
    part = "Part XVI-A",
    description = "Program service revenue",
    group = "/IRS990PF/AnalysisIncomeProducingActyGrp/ProgramServiceRevenueGrp",
    parent = "return_pf_part_xvia"
)]
pub struct ProgramServiceRevenue {
    pub object_id: String,
    pub ein: String,

    /// Description
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/ProgramServiceRevenueGrp/Desc",
        line = "Part XVI-A Line 1 Column A",
        long
    )]
    pub desc: Option<String>,

    /// Business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/ProgramServiceRevenueGrp/BusinessCd",
        line = "Part XVI-A Line 1 Column A",
        max_length = 6
    )]
    pub business_cd: Option<String>,

    /// Unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/ProgramServiceRevenueGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 1 Column B"
    )]
    pub unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/ProgramServiceRevenueGrp/ExclusionCd",
        line = "Part XVI-A Line 1 Column C",
        max_length = 6
    )]
    pub exclusion_cd: Option<String>,

    /// Amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/ProgramServiceRevenueGrp/ExclusionAmt",
        line = "Part XVI-A Line 1 Column D"
    )]
    pub exclusion_amt: Option<i64>,

    /// Related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/ProgramServiceRevenueGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 1 Column E"
    )]
    pub related_or_exempt_function_incm_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_othrrvndscrbd",
    form = "Form990PF",
    part = "Part XVI-A",
    description = "Other revenue",
    group = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherRevenueDescribedGrp",
    parent = "return_pf_part_xvia"
)]
pub struct OtherRevenueDescribed {
    pub object_id: String,
    pub ein: String,

    /// Description
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherRevenueDescribedGrp/Desc",
        line = "Part XVI-A Line 11 Column A",
        long
    )]
    pub desc: Option<String>,

    /// Business code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherRevenueDescribedGrp/BusinessCd",
        line = "Part XVI-A Line 11 Column A",
        max_length = 6
    )]
    pub business_cd: Option<String>,

    /// Unrelated business income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherRevenueDescribedGrp/UnrelatedBusinessTaxblIncmAmt",
        line = "Part XVI-A Line 11 Column B"
    )]
    pub unrelated_business_taxbl_incm_amt: Option<i64>,

    /// Exclusion code
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherRevenueDescribedGrp/ExclusionCd",
        line = "Part XVI-A Line 11 Column C",
        max_length = 6
    )]
    pub exclusion_cd: Option<String>,

    /// Amount excluded by section 512, 513 or 514
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherRevenueDescribedGrp/ExclusionAmt",
        line = "Part XVI-A Line 11 Column D"
    )]
    pub exclusion_amt: Option<i64>,

    /// Related or exempt function income
    #[field(
        xpath = "/IRS990PF/AnalysisIncomeProducingActyGrp/OtherRevenueDescribedGrp/RelatedOrExemptFunctionIncmAmt",
        line = "Part XVI-A Line 11 Column E"
    )]
    pub related_or_exempt_function_incm_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_rltnshpschexmptprps",
    form = "Form990PF",
    part = "Part XVI-B",
    description = "Relationship of activities to the accomplishment of exempt purposes",
    group = "/IRS990PF/RelationshipSchExemptPurposeGrp"
)]
pub struct RelationshipSchExemptPurpose {
    pub object_id: String,
    pub ein: String,

    /// Line number from Part XVI-A
    #[field(xpath = "/IRS990PF/RelationshipSchExemptPurposeGrp/LineNumberTxt", max_length = 10)]
    pub line_number_txt: Option<String>,

    /// How the activity contributed to the accomplishment of exempt purposes
    #[field(xpath = "/IRS990PF/RelationshipSchExemptPurposeGrp/ExplanationTxt", long)]
    pub explanation_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_part_xvii",
    form = "Form990PF",
    part = "Part XVII",
    description = "Transfers to and transactions with noncharitable exempt organizations"
)]
pub struct PartXVII {
    pub object_id: String,
    pub ein: String,

    /// Transfers of cash to a noncharitable exempt organization
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/CashInd",
        line = "Part XVII Line 1a(1)",
        max_length = 5
    )]
    pub cash_ind: Option<String>,

    /// Transfers of other assets
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/OtherAssetsInd",
        line = "Part XVII Line 1a(2)",
        max_length = 5
    )]
    pub other_assets_ind: Option<String>,

    /// Sales of assets to a noncharitable exempt organization
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/SalesOrExchangesInd",
        line = "Part XVII Line 1b(1)",
        max_length = 5
    )]
    pub sales_or_exchanges_ind: Option<String>,

    /// Purchases of assets from a noncharitable exempt organization
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/PurchasesOfAssetsInd",
        line = "Part XVII Line 1b(2)",
        max_length = 5
    )]
    pub purchases_of_assets_ind: Option<String>,

    /// Rental of facilities, equipment or other assets
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/RentalOfFacilitiesInd",
        line = "Part XVII Line 1b(3)",
        max_length = 5
    )]
    pub rental_of_facilities_ind: Option<String>,

    /// Reimbursement arrangements
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/ReimbursementArrangementsInd",
        line = "Part XVII Line 1b(4)",
        max_length = 5
    )]
    pub reimbursement_arrangements_ind: Option<String>,

    /// Loans or loan guarantees
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/LoansOrGuaranteesInd",
        line = "Part XVII Line 1b(5)",
        max_length = 5
    )]
    pub loans_or_guarantees_ind: Option<String>,

    /// Performance of services or membership or fundraising solicitations
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/PerformanceOfServicesInd",
        line = "Part XVII Line 1b(6)",
        max_length = 5
    )]
    pub performance_of_services_ind: Option<String>,

    /// Sharing of facilities, equipment, mailing lists, other assets or paid employees
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/SharingOfFacilitiesInd",
        line = "Part XVII Line 1c",
        max_length = 5
    )]
    pub sharing_of_facilities_ind: Option<String>,

    /// Affiliated with or related to a tax-exempt organization
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/AffiliatedWithRelatedExemptInd",
        line = "Part XVII Line 2a",
        max_length = 5
    )]
    pub affiliated_with_related_exempt_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_trnsfrstrnsctnsdtl",
    form = "Form990PF",
    part = "Part XVII",
    description = "Transfers, transactions and sharing arrangements",
    group = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/TransfersTransactionsDetail",
    parent = "return_pf_part_xvii"
)]
pub struct TransfersTransactionsDetail {
    pub object_id: String,
    pub ein: String,

    /// Line number
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/TransfersTransactionsDetail/LineNumberTxt",
        line = "Part XVII Line 1d Column A",
        max_length = 10
    )]
    pub line_number_txt: Option<String>,

    /// Amount involved
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/TransfersTransactionsDetail/InvolvedAmt",
        line = "Part XVII Line 1d Column B"
    )]
    pub involved_amt: Option<i64>,

    /// Name of noncharitable exempt organization
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/TransfersTransactionsDetail/NoncharitableExemptOrgNm",
        line = "Part XVII Line 1d Column C",
        name = "TrnsfrsTrnsctnsDtl_NnchrtblExmptOrgNm"
    )]
    pub noncharitable_exempt_org_nm: Option<String>,

    /// Description of transfers, transactions and sharing arrangements
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/TransfersTransactionsDetail/TransfersTransacAndSharingDesc",
        line = "Part XVII Line 1d Column D",
        name = "TrnsfrsTrnsctnsDtl_TrnsfrsTrnscAndShrngDsc",
        long
    )]
    pub transfers_transac_and_sharing_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_pf_rltdexmptorg",
    form = "Form990PF",
    part = "Part XVII",
    description = "Related tax-exempt organizations",
    group = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/RelatedExemptOrgGrp",
    parent = "return_pf_part_xvii"
)]
pub struct RelatedExemptOrg {
    pub object_id: String,
    pub ein: String,

    /// Name of organization
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/RelatedExemptOrgGrp/OrganizationName/BusinessNameLine1Txt",
        line = "Part XVII Line 2b Column A",
        name = "RltdExmptOrg_OrgnztnNm_BsnssNmLn1Txt"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Type of organization
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/RelatedExemptOrgGrp/OrganizationTypeDesc",
        line = "Part XVII Line 2b Column B",
        long
    )]
    pub organization_type_desc: Option<String>,

    /// Description of relationship
    #[field(
        xpath = "/IRS990PF/TrnsfrTrnsctnRltnshpNonchrtblGrp/RelatedExemptOrgGrp/RelationshipDesc",
        line = "Part XVII Line 2b Column C",
        long
    )]
    pub relationship_desc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormTable;

    #[test]
    fn test_nested_repeating_group() {
        let table = GrantOrContributionPdDurYr::definition();
        assert_eq!(table.parent(), Some("return_pf_part_xv"));
        assert!(table.has_column("Amt"));
        assert!(table.has_column("RcpntBsnssNm_BsnssNmLn1Txt"));
        assert!(table.has_column("RcpntUSAddrss_CtyNm"));
    }

    #[test]
    fn test_part_i_columns_keep_group_prefix() {
        let table = PartI::definition();
        assert!(table.has_column("AnlyssOfRvnAndExpnss_TtlRvAndExpnssAmt"));
    }

    #[test]
    fn test_parts_use_current_numbering() {
        assert_eq!(PartVI::definition().name(), "return_pf_part_vi");
        assert!(PartVI::definition().has_column("ExcsTxBsdOnInvstIncm_InvstmntIncmExcsTxAmt"));
        assert_eq!(OfficerDirTrstKeyEmpl::definition().parent(), Some("return_pf_part_viii"));
        assert_eq!(CompensationHighestPaidEmpl::definition().parent(), Some("return_pf_part_viii"));
        assert_eq!(PartXIII::definition().part(), "Part XIII");
        assert!(PartXIII::definition().has_column("UndstrbtdIncm_DstrbtblAsAdjstdAmt"));
    }

    #[test]
    fn test_wide_grid_columns_drop_part_prefix() {
        let table = PartXVIA::definition();
        assert!(table.has_column("FsAndCntrctsGvAgncs_RltdOrExmptFnctnIncmAmt"));
        assert!(!table.has_column("AnlyssIncmPrdcngActy_FsAndCntrctsGvAgncs_RltdOrExmptFnctnIncmAmt"));
        assert!(table.all_columns().all(|column| column.name.len() <= 63));
    }
}
