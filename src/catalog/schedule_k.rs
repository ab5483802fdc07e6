//! Schedule K: Supplemental Information on Tax-Exempt Bonds.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        TaxExemptBondsIssues::definition(),
        Proceeds::definition(),
        PrivateBusinessUse::definition(),
        Arbitrage::definition(),
        ProceduresCorrectiveAction::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedk_txexmptbndsisss",
    form = "ScheduleK",
    part = "Part I",
    description = "Bond issues",
    group = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp"
)]
pub struct TaxExemptBondsIssues {
    pub object_id: String,
    pub ein: String,

    /// Issuer name
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/BondIssuerName/BusinessNameLine1Txt", line = "Part I Column a")]
    pub bond_issuer_name_txt: Option<String>,

    /// Issuer EIN
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/IssuerEIN", line = "Part I Column b", max_length = 9)]
    pub issuer_ein: Option<String>,

    /// CUSIP number
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/CUSIPNum", line = "Part I Column c", max_length = 9)]
    pub cusip_num: Option<String>,

    /// Date issued
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/BondIssuedDt", line = "Part I Column d", date)]
    pub bond_issued_dt: Option<String>,

    /// Issue price
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/IssuePriceAmt", line = "Part I Column e")]
    pub issue_price_amt: Option<i64>,

    /// Description of purpose
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/BondDescriptionPurposeTxt", line = "Part I Column f", long)]
    pub bond_description_purpose_txt: Option<String>,

    /// Defeased
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/DefeasedInd", line = "Part I Column g", max_length = 5)]
    pub defeased_ind: Option<String>,

    /// On behalf of issuer
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/OnBehalfOfIssuerInd", line = "Part I Column h", max_length = 5)]
    pub on_behalf_of_issuer_ind: Option<String>,

    /// Pooled financing
    #[field(xpath = "/IRS990ScheduleK/TaxExemptBondsIssuesGrp/PooledFinancingInd", line = "Part I Column i", max_length = 5)]
    pub pooled_financing_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedk_prcds",
    form = "ScheduleK",
    part = "Part II",
    description = "Proceeds",
    group = "/IRS990ScheduleK/ProceedsGrp"
)]
pub struct Proceeds {
    pub object_id: String,
    pub ein: String,

    /// Bond issue (A, B, C or D)
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/BondReferenceCd", line = "Part II Columns A-D", max_length = 1)]
    pub bond_reference_cd: Option<String>,

    /// Amount of bonds retired
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/RetiredBondsAmt", line = "Part II Line 1")]
    pub retired_bonds_amt: Option<i64>,

    /// Amount of bonds legally defeased
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/BondsDefeasedAmt", line = "Part II Line 2")]
    pub bonds_defeased_amt: Option<i64>,

    /// Total proceeds of issue
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/TotalProceedsOfIssueAmt", line = "Part II Line 3")]
    pub total_proceeds_of_issue_amt: Option<i64>,

    /// Gross proceeds in reserve funds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/GrossProceedsInReserveFundAmt", line = "Part II Line 4")]
    pub gross_proceeds_in_reserve_fund_amt: Option<i64>,

    /// Capitalized interest from proceeds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/CapitalizedInterestAmt", line = "Part II Line 5")]
    pub capitalized_interest_amt: Option<i64>,

    /// Proceeds in refunding escrows
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/RefundingEscrowAmt", line = "Part II Line 6")]
    pub refunding_escrow_amt: Option<i64>,

    /// Issuance costs from proceeds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/IssuanceCostsAmt", line = "Part II Line 7")]
    pub issuance_costs_amt: Option<i64>,

    /// Credit enhancement from proceeds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/CreditEnhancementAmt", line = "Part II Line 8")]
    pub credit_enhancement_amt: Option<i64>,

    /// Working capital expenditures from proceeds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/WorkingCapitalExpendituresAmt", line = "Part II Line 9")]
    pub working_capital_expenditures_amt: Option<i64>,

    /// Capital expenditures from proceeds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/CapitalExpendituresAmt", line = "Part II Line 10")]
    pub capital_expenditures_amt: Option<i64>,

    /// Other spent proceeds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/OtherSpentProceedsAmt", line = "Part II Line 11")]
    pub other_spent_proceeds_amt: Option<i64>,

    /// Other unspent proceeds
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/OtherUnspentProceedsAmt", line = "Part II Line 12")]
    pub other_unspent_proceeds_amt: Option<i64>,

    /// Year of substantial completion
    #[field(xpath = "/IRS990ScheduleK/ProceedsGrp/SubstantialCompletionYr", line = "Part II Line 13")]
    pub substantial_completion_yr: Option<i32>,

    /// Bonds issued as part of a current refunding issue
    #[field(
        xpath = "/IRS990ScheduleK/ProceedsGrp/RefundingIssueInd",
        line = "Part II Line 14",
        max_length = 5
    )]
    pub refunding_issue_ind: Option<String>,

    /// Bonds issued as part of an advance refunding issue
    #[field(
        xpath = "/IRS990ScheduleK/ProceedsGrp/AdvanceRefundingInd",
        line = "Part II Line 15",
        max_length = 5
    )]
    pub advance_refunding_ind: Option<String>,

    /// Final allocation of proceeds made
    #[field(
        xpath = "/IRS990ScheduleK/ProceedsGrp/FinalAllocationMadeInd",
        line = "Part II Line 16",
        max_length = 5
    )]
    pub final_allocation_made_ind: Option<String>,

    /// Adequate books and records maintained to support the final allocation
    #[field(
        xpath = "/IRS990ScheduleK/ProceedsGrp/AdequateBooksAndRecMaintInd",
        line = "Part II Line 17",
        max_length = 5
    )]
    pub adequate_books_and_rec_maint_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedk_prvtbsnssus",
    form = "ScheduleK",
    part = "Part III",
    description = "Private business use",
    group = "/IRS990ScheduleK/PrivateBusinessUseGrp"
)]
pub struct PrivateBusinessUse {
    pub object_id: String,
    pub ein: String,

    /// Bond issue (A, B, C or D)
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/BondReferenceCd",
        line = "Part III Columns A-D",
        max_length = 1
    )]
    pub bond_reference_cd: Option<String>,

    /// Organization a partner in a partnership owning bond-financed property
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/PartnershipPropertyInd",
        line = "Part III Line 1",
        max_length = 5
    )]
    pub partnership_property_ind: Option<String>,

    /// Lease arrangements for bond-financed property
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/LeaseArrangementsInd",
        line = "Part III Line 2",
        max_length = 5
    )]
    pub lease_arrangements_ind: Option<String>,

    /// Management or service contracts for bond-financed property
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/ManagementContractsInd",
        line = "Part III Line 3a",
        max_length = 5
    )]
    pub management_contracts_ind: Option<String>,

    /// Outside counsel reviewed management or service contracts
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/CounselReviewContractsInd",
        line = "Part III Line 3b",
        max_length = 5
    )]
    pub counsel_review_contracts_ind: Option<String>,

    /// Research agreements for bond-financed property
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/ResearchAgreementsInd",
        line = "Part III Line 4a",
        max_length = 5
    )]
    pub research_agreements_ind: Option<String>,

    /// Outside counsel reviewed research agreements
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/CounselReviewResearchInd",
        line = "Part III Line 4b",
        max_length = 5
    )]
    pub counsel_review_research_ind: Option<String>,

    /// Percentage of financed property used by for-profit entities
    #[field(xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/PrivateBusinessUsePct", line = "Part III Line 5")]
    pub private_business_use_pct: Option<f64>,

    /// Percentage of financed property used in unrelated trade or business
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/UnrelatedTradeBusinessPct",
        line = "Part III Line 6"
    )]
    pub unrelated_trade_business_pct: Option<f64>,

    /// Total of lines 5 and 6
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/TotalPrivateBusinessUsePct",
        line = "Part III Line 7"
    )]
    pub total_private_business_use_pct: Option<f64>,

    /// Bond issue meets the private security or payment test
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/BondIssueMeetPrivateSecTestInd",
        line = "Part III Line 8",
        max_length = 5
    )]
    pub bond_issue_meet_private_sec_test_ind: Option<String>,

    /// Bond-financed property sold to a nongovernmental person
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/BondFinancedPropertySoldInd",
        line = "Part III Line 9a",
        max_length = 5
    )]
    pub bond_financed_property_sold_ind: Option<String>,

    /// Appropriate remedial action taken
    #[field(
        xpath = "/IRS990ScheduleK/PrivateBusinessUseGrp/RemedialActionTakenInd",
        line = "Part III Line 9c",
        max_length = 5
    )]
    pub remedial_action_taken_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedk_arbtrg",
    form = "ScheduleK",
    part = "Part IV",
    description = "Arbitrage",
    group = "/IRS990ScheduleK/ArbitrageGrp"
)]
pub struct Arbitrage {
    pub object_id: String,
    pub ein: String,

    /// Bond issue (A, B, C or D)
    #[field(xpath = "/IRS990ScheduleK/ArbitrageGrp/BondReferenceCd", line = "Part IV Columns A-D", max_length = 1)]
    pub bond_reference_cd: Option<String>,

    /// Form 8038-T filed
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/Form8038TFiledInd",
        line = "Part IV Line 1",
        max_length = 5
    )]
    pub form_8038_t_filed_ind: Option<String>,

    /// Rebate not due yet
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/RebateNotDueYetInd",
        line = "Part IV Line 2a",
        max_length = 5
    )]
    pub rebate_not_due_yet_ind: Option<String>,

    /// Exception to rebate
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/ExceptionToRebateInd",
        line = "Part IV Line 2b",
        max_length = 5
    )]
    pub exception_to_rebate_ind: Option<String>,

    /// No rebate due
    #[field(xpath = "/IRS990ScheduleK/ArbitrageGrp/NoRebateDueInd", line = "Part IV Line 2c", max_length = 5)]
    pub no_rebate_due_ind: Option<String>,

    /// Date of the rebate computation
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/RebateComputationPerformedDt",
        line = "Part IV Line 2c",
        date
    )]
    pub rebate_computation_performed_dt: Option<String>,

    /// Hedge identified in the books and records
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/HedgeIdentifiedInBooksInd",
        line = "Part IV Line 3",
        max_length = 5
    )]
    pub hedge_identified_in_books_ind: Option<String>,

    /// Name of hedge provider
    #[field(xpath = "/IRS990ScheduleK/ArbitrageGrp/HedgeProviderNm", line = "Part IV Line 4a")]
    pub hedge_provider_nm: Option<String>,

    /// Term of hedge
    #[field(xpath = "/IRS990ScheduleK/ArbitrageGrp/TermOfHedgeNum", line = "Part IV Line 4b")]
    pub term_of_hedge_num: Option<String>,

    /// Hedge superintegrated
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/SuperIntegratedHedgeInd",
        line = "Part IV Line 4c",
        max_length = 5
    )]
    pub super_integrated_hedge_ind: Option<String>,

    /// Hedge terminated
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/HedgeTerminatedInd",
        line = "Part IV Line 4d",
        max_length = 5
    )]
    pub hedge_terminated_ind: Option<String>,

    /// Gross proceeds invested in a guaranteed investment contract
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/GrossProceedsInvestedInd",
        line = "Part IV Line 5a",
        max_length = 5
    )]
    pub gross_proceeds_invested_ind: Option<String>,

    /// Name of GIC provider
    #[field(xpath = "/IRS990ScheduleK/ArbitrageGrp/GICProviderNm", line = "Part IV Line 5b")]
    pub gic_provider_nm: Option<String>,

    /// Term of GIC
    #[field(xpath = "/IRS990ScheduleK/ArbitrageGrp/TermOfGICNum", line = "Part IV Line 5c")]
    pub term_of_gic_num: Option<String>,

    /// Regulatory safe harbor for the GIC satisfied
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/RegulatoryRequirementsMetInd",
        line = "Part IV Line 5d",
        max_length = 5
    )]
    pub regulatory_requirements_met_ind: Option<String>,

    /// Gross proceeds invested beyond an available temporary period
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/GrossProceedsInvestedBeyondInd",
        line = "Part IV Line 6",
        max_length = 5
    )]
    pub gross_proceeds_invested_beyond_ind: Option<String>,

    /// Procedures established to monitor section 148 requirements
    #[field(
        xpath = "/IRS990ScheduleK/ArbitrageGrp/WrittenProceduresMonitorInd",
        line = "Part IV Line 7",
        max_length = 5
    )]
    pub written_procedures_monitor_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedk_prcdrscrrctvactn",
    form = "ScheduleK",
    part = "Part V",
    description = "Procedures to undertake corrective action",
    group = "/IRS990ScheduleK/ProceduresCorrectiveActionGrp"
)]
pub struct ProceduresCorrectiveAction {
    pub object_id: String,
    pub ein: String,

    /// Bond issue (A, B, C or D)
    #[field(
        xpath = "/IRS990ScheduleK/ProceduresCorrectiveActionGrp/BondReferenceCd",
        line = "Part V Columns A-D",
        max_length = 1
    )]
    pub bond_reference_cd: Option<String>,

    /// Written procedures to take timely corrective action adopted
    #[field(
        xpath = "/IRS990ScheduleK/ProceduresCorrectiveActionGrp/ProceduresToUndertakeInd",
        line = "Part V Line 1",
        max_length = 5
    )]
    pub procedures_to_undertake_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedk_spplmntlinfrmtndtl",
    form = "ScheduleK",
    part = "Part VI",
    description = "Supplemental information",
    group = "/IRS990ScheduleK/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleK/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part VI"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleK/SupplementalInformationDetail/ExplanationTxt", line = "Part VI", long)]
    pub explanation_txt: Option<String>,
}
