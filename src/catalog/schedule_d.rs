//! Schedule D: Supplemental Financial Statements.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        PartII::definition(),
        PartIII::definition(),
        PartIV::definition(),
        PartV::definition(),
        PartVI::definition(),
        PartVII::definition(),
        OtherSecurities::definition(),
        PartVIII::definition(),
        InvstProgramRelatedOrg::definition(),
        PartIX::definition(),
        OtherAssetsOrg::definition(),
        PartX::definition(),
        OtherLiabilitiesOrg::definition(),
        PartXI::definition(),
        PartXII::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_i",
    form = "ScheduleD",
    part = "Part I",
    description = "Donor advised funds"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Number of donor advised funds at end of year
    #[field(xpath = "/IRS990ScheduleD/DonorAdvisedFundsHeldCnt", line = "Part I Line 1 Column a")]
    pub donor_advised_funds_held_cnt: Option<i32>,

    /// Aggregate value of contributions to donor advised funds
    #[field(xpath = "/IRS990ScheduleD/DonorAdvisedFundsContriAmt", line = "Part I Line 2 Column a")]
    pub donor_advised_funds_contri_amt: Option<i64>,

    /// Aggregate value of grants from donor advised funds
    #[field(xpath = "/IRS990ScheduleD/DonorAdvisedFundsGrantsAmt", line = "Part I Line 3 Column a")]
    pub donor_advised_funds_grants_amt: Option<i64>,

    /// Aggregate value of donor advised funds at end of year
    #[field(xpath = "/IRS990ScheduleD/DonorAdvisedFundsVlEOYAmt", line = "Part I Line 4 Column a")]
    pub donor_advised_funds_vl_eoy_amt: Option<i64>,

    /// Donors notified that assets are the organization's property
    #[field(xpath = "/IRS990ScheduleD/DisclosedOrgLegCtrlInd", line = "Part I Line 5", max_length = 5)]
    pub disclosed_org_leg_ctrl_ind: Option<String>,

    /// Number of other funds or accounts at end of year
    #[field(xpath = "/IRS990ScheduleD/FundsAndOtherAccountsHeldCnt", line = "Part I Line 1 Column b")]
    pub funds_and_other_accounts_held_cnt: Option<i32>,

    /// Contributions to other funds or accounts
    #[field(xpath = "/IRS990ScheduleD/FundsAndOtherAccountsContriAmt", line = "Part I Line 2 Column b")]
    pub funds_and_other_accounts_contri_amt: Option<i64>,

    /// Grants from other funds or accounts
    #[field(xpath = "/IRS990ScheduleD/FundsAndOtherAccountsGrantsAmt", line = "Part I Line 3 Column b")]
    pub funds_and_other_accounts_grants_amt: Option<i64>,

    /// Value of other funds or accounts at end of year
    #[field(xpath = "/IRS990ScheduleD/FundsAndOtherAccountsVlEOYAmt", line = "Part I Line 4 Column b")]
    pub funds_and_other_accounts_vl_eoy_amt: Option<i64>,

    /// Grantees and donors told grants are for charitable purposes only
    #[field(xpath = "/IRS990ScheduleD/DisclosedForCharitablePrpsInd", line = "Part I Line 6", max_length = 5)]
    pub disclosed_for_charitable_prps_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_ii",
    form = "ScheduleD",
    part = "Part II",
    description = "Conservation easements"
)]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Purpose: preservation of land for public use
    #[field(xpath = "/IRS990ScheduleD/PreservationForPublicUseInd", line = "Part II Line 1", max_length = 5)]
    pub preservation_for_public_use_ind: Option<String>,

    /// Purpose: protection of natural habitat
    #[field(
        xpath = "/IRS990ScheduleD/ProtectionOfNaturalHabitatInd",
        line = "Part II Line 1",
        max_length = 5
    )]
    pub protection_of_natural_habitat_ind: Option<String>,

    /// Purpose: preservation of open space
    #[field(xpath = "/IRS990ScheduleD/PreservationOfOpenSpaceInd", line = "Part II Line 1", max_length = 5)]
    pub preservation_of_open_space_ind: Option<String>,

    /// Purpose: preservation of a historically important land area
    #[field(xpath = "/IRS990ScheduleD/HistoricLandAreaInd", line = "Part II Line 1", max_length = 5)]
    pub historic_land_area_ind: Option<String>,

    /// Purpose: preservation of a certified historic structure
    #[field(xpath = "/IRS990ScheduleD/HistoricStructureInd", line = "Part II Line 1", max_length = 5)]
    pub historic_structure_ind: Option<String>,

    /// Total number of conservation easements
    #[field(xpath = "/IRS990ScheduleD/TotalConservationEasementsCnt", line = "Part II Line 2a")]
    pub total_conservation_easements_cnt: Option<i32>,

    /// Total acreage restricted by conservation easements
    #[field(xpath = "/IRS990ScheduleD/TotalAcreageCnt", line = "Part II Line 2b")]
    pub total_acreage_cnt: Option<i32>,

    /// Easements on a certified historic structure
    #[field(xpath = "/IRS990ScheduleD/HistoricStructureCnt", line = "Part II Line 2c")]
    pub historic_structure_cnt: Option<i32>,

    /// Easements on a historic structure acquired after July 25, 2006
    #[field(xpath = "/IRS990ScheduleD/HistoricStructureAfter8172006Cnt", line = "Part II Line 2d")]
    pub historic_structure_after_8172006_cnt: Option<i32>,

    /// Easements modified, transferred, released or extinguished
    #[field(xpath = "/IRS990ScheduleD/ModifiedConservationEasementsCnt", line = "Part II Line 3")]
    pub modified_conservation_easements_cnt: Option<i32>,

    /// Number of states where property is located
    #[field(xpath = "/IRS990ScheduleD/StatesConservationEasementCnt", line = "Part II Line 4")]
    pub states_conservation_easement_cnt: Option<i32>,

    /// Written policy on monitoring, inspection and enforcement
    #[field(xpath = "/IRS990ScheduleD/WrittenPolicyMonitoringInd", line = "Part II Line 5", max_length = 5)]
    pub written_policy_monitoring_ind: Option<String>,

    /// Staff and volunteer hours devoted to monitoring
    #[field(xpath = "/IRS990ScheduleD/StaffHoursDevotedCnt", line = "Part II Line 6")]
    pub staff_hours_devoted_cnt: Option<i32>,

    /// Expenses incurred in monitoring and enforcing easements
    #[field(xpath = "/IRS990ScheduleD/ExpensesIncurredMonitoringAmt", line = "Part II Line 7")]
    pub expenses_incurred_monitoring_amt: Option<i64>,

    /// Historic structure easement satisfies section 170(h)(4)(B)(i) and (ii)
    #[field(
        xpath = "/IRS990ScheduleD/Section170h4BiAndBiiRqrmntsInd",
        line = "Part II Line 8",
        max_length = 5
    )]
    pub section_170h4_bi_and_bii_rqrmnts_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_iii",
    form = "ScheduleD",
    part = "Part III",
    description = "Collections of art, historical treasures or other similar assets"
)]
pub struct PartIII {
    pub object_id: String,
    pub ein: String,

    /// Revenue included on Form 990, Part VIII, line 1
    #[field(xpath = "/IRS990ScheduleD/ArtHistoricalTreasuresRevAmt", line = "Part III Line 1b(i)")]
    pub art_historical_treasures_rev_amt: Option<i64>,

    /// Assets included in Form 990, Part X
    #[field(xpath = "/IRS990ScheduleD/ArtHistoricalTreasuresAstAmt", line = "Part III Line 1b(ii)")]
    pub art_historical_treasures_ast_amt: Option<i64>,

    /// Revenue from collections held for public exhibition
    #[field(xpath = "/IRS990ScheduleD/HistoricalTreasuresRevAmt", line = "Part III Line 2a")]
    pub historical_treasures_rev_amt: Option<i64>,

    /// Assets from collections held for public exhibition
    #[field(xpath = "/IRS990ScheduleD/HistoricalTreasuresAstAmt", line = "Part III Line 2b")]
    pub historical_treasures_ast_amt: Option<i64>,

    /// Collections used for public exhibition
    #[field(xpath = "/IRS990ScheduleD/PublicExhibitionInd", line = "Part III Line 3a", max_length = 5)]
    pub public_exhibition_ind: Option<String>,

    /// Collections used for scholarly research
    #[field(xpath = "/IRS990ScheduleD/ScholarlyResearchInd", line = "Part III Line 3b", max_length = 5)]
    pub scholarly_research_ind: Option<String>,

    /// Collections used for preservation for future generations
    #[field(
        xpath = "/IRS990ScheduleD/PreservationForFutureGenInd",
        line = "Part III Line 3c",
        max_length = 5
    )]
    pub preservation_for_future_gen_ind: Option<String>,

    /// Collections used in loan or exchange programs
    #[field(xpath = "/IRS990ScheduleD/LoanOrExchangeProgramsInd", line = "Part III Line 3d", max_length = 5)]
    pub loan_or_exchange_programs_ind: Option<String>,

    /// Collections used for other purposes
    #[field(xpath = "/IRS990ScheduleD/OtherPurposesInd", line = "Part III Line 3e", max_length = 5)]
    pub other_purposes_ind: Option<String>,

    /// Description of collections and their use
    #[field(xpath = "/IRS990ScheduleD/CollectionExplanationTxt", line = "Part III Line 4", long)]
    pub collection_explanation_txt: Option<String>,

    /// Assets to be sold to raise funds rather than held in the collection
    #[field(xpath = "/IRS990ScheduleD/AssetSaleOrDisposalInd", line = "Part III Line 5", max_length = 5)]
    pub asset_sale_or_disposal_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_iv",
    form = "ScheduleD",
    part = "Part IV",
    description = "Escrow and custodial arrangements"
)]
pub struct PartIV {
    pub object_id: String,
    pub ein: String,

    /// Organization is an agent, trustee, custodian or other intermediary
    #[field(xpath = "/IRS990ScheduleD/AgentTrusteeEtcInd", line = "Part IV Line 1a", max_length = 5)]
    pub agent_trustee_etc_ind: Option<String>,

    /// Escrow or custodial account liability included on Form 990, Part X
    #[field(xpath = "/IRS990ScheduleD/IncludedOnFormInd", line = "Part IV Line 1b", max_length = 5)]
    pub included_on_form_ind: Option<String>,

    /// Beginning balance
    #[field(xpath = "/IRS990ScheduleD/EscrowAccountGrp/BeginningYearBalanceAmt", line = "Part IV Line 1c")]
    pub beginning_year_balance_amt: Option<i64>,

    /// Additions during the year
    #[field(xpath = "/IRS990ScheduleD/EscrowAccountGrp/AdditionsDuringYearAmt", line = "Part IV Line 1d")]
    pub additions_during_year_amt: Option<i64>,

    /// Distributions during the year
    #[field(xpath = "/IRS990ScheduleD/EscrowAccountGrp/DistributionsDuringYearAmt", line = "Part IV Line 1e")]
    pub distributions_during_year_amt: Option<i64>,

    /// Ending balance
    #[field(xpath = "/IRS990ScheduleD/EscrowAccountGrp/EndingBalanceAmt", line = "Part IV Line 1f")]
    pub ending_balance_amt: Option<i64>,

    /// Escrow or custodial account liability included on Form 990, Part X, line 21
    #[field(xpath = "/IRS990ScheduleD/EscrowAccountLiabilityInd", line = "Part IV Line 2a", max_length = 5)]
    pub escrow_account_liability_ind: Option<String>,

    /// Explanation provided in Part XIII
    #[field(xpath = "/IRS990ScheduleD/ExplanationOnSchOInd", line = "Part IV Line 2b", max_length = 5)]
    pub explanation_on_sch_o_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(name = "return_skedd_part_v", form = "ScheduleD", part = "Part V", description = "Endowment funds")]
pub struct PartV {
    pub object_id: String,
    pub ein: String,

    /// Beginning of year balance - current year
    #[field(xpath = "/IRS990ScheduleD/CYEndwmtFundGrp/BeginningYearBalanceAmt", line = "Part V Line 1a Column a")]
    pub cy_beginning_year_balance_amt: Option<i64>,

    /// Contributions - current year
    #[field(xpath = "/IRS990ScheduleD/CYEndwmtFundGrp/ContributionsAmt", line = "Part V Line 1b Column a")]
    pub cy_contributions_amt: Option<i64>,

    /// Net investment earnings, gains and losses - current year
    #[field(xpath = "/IRS990ScheduleD/CYEndwmtFundGrp/InvestmentEarningsOrLossesAmt", line = "Part V Line 1c Column a")]
    pub cy_investment_earnings_or_losses_amt: Option<i64>,

    /// Grants or scholarships - current year
    #[field(xpath = "/IRS990ScheduleD/CYEndwmtFundGrp/GrantsOrScholarshipsAmt", line = "Part V Line 1d Column a")]
    pub cy_grants_or_scholarships_amt: Option<i64>,

    /// End of year balance - current year
    #[field(xpath = "/IRS990ScheduleD/CYEndwmtFundGrp/EndYearBalanceAmt", line = "Part V Line 1g Column a")]
    pub cy_end_year_balance_amt: Option<i64>,

    /// Board designated or quasi-endowment percentage
    #[field(xpath = "/IRS990ScheduleD/BoardDesignatedBalanceEOYPct", line = "Part V Line 2a")]
    pub board_designated_balance_eoy_pct: Option<f64>,

    /// Permanent endowment percentage
    #[field(xpath = "/IRS990ScheduleD/PrmnntEndowmentBalanceEOYPct", line = "Part V Line 2b")]
    pub prmnnt_endowment_balance_eoy_pct: Option<f64>,

    /// Temporarily restricted endowment percentage
    #[field(xpath = "/IRS990ScheduleD/TermEndowmentBalanceEOYPct", line = "Part V Line 2c")]
    pub term_endowment_balance_eoy_pct: Option<f64>,

    /// Other expenditures for facilities and programs - current year
    #[field(
        xpath = "/IRS990ScheduleD/CYEndwmtFundGrp/OtherExpendituresAmt",
        line = "Part V Line 1e Column a"
    )]
    pub cy_other_expenditures_amt: Option<i64>,

    /// Administrative expenses - current year
    #[field(
        xpath = "/IRS990ScheduleD/CYEndwmtFundGrp/AdministrativeExpensesAmt",
        line = "Part V Line 1f Column a"
    )]
    pub cy_administrative_expenses_amt: Option<i64>,

    /// Beginning of year balance - prior year
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus1YrEndwmtFundGrp/BeginningYearBalanceAmt",
        line = "Part V Line 1a Column b"
    )]
    pub cy_minus1_beginning_year_balance_amt: Option<i64>,

    /// Contributions - prior year
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus1YrEndwmtFundGrp/ContributionsAmt",
        line = "Part V Line 1b Column b"
    )]
    pub cy_minus1_contributions_amt: Option<i64>,

    /// Net investment earnings, gains and losses - prior year
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus1YrEndwmtFundGrp/InvestmentEarningsOrLossesAmt",
        line = "Part V Line 1c Column b"
    )]
    pub cy_minus1_investment_earnings_or_losses_amt: Option<i64>,

    /// Grants or scholarships - prior year
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus1YrEndwmtFundGrp/GrantsOrScholarshipsAmt",
        line = "Part V Line 1d Column b"
    )]
    pub cy_minus1_grants_or_scholarships_amt: Option<i64>,

    /// Other expenditures for facilities and programs - prior year
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus1YrEndwmtFundGrp/OtherExpendituresAmt",
        line = "Part V Line 1e Column b"
    )]
    pub cy_minus1_other_expenditures_amt: Option<i64>,

    /// Administrative expenses - prior year
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus1YrEndwmtFundGrp/AdministrativeExpensesAmt",
        line = "Part V Line 1f Column b"
    )]
    pub cy_minus1_administrative_expenses_amt: Option<i64>,

    /// End of year balance - prior year
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus1YrEndwmtFundGrp/EndYearBalanceAmt",
        line = "Part V Line 1g Column b"
    )]
    pub cy_minus1_end_year_balance_amt: Option<i64>,

    /// Beginning of year balance - two years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus2YrEndwmtFundGrp/BeginningYearBalanceAmt",
        line = "Part V Line 1a Column c"
    )]
    pub cy_minus2_beginning_year_balance_amt: Option<i64>,

    /// Contributions - two years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus2YrEndwmtFundGrp/ContributionsAmt",
        line = "Part V Line 1b Column c"
    )]
    pub cy_minus2_contributions_amt: Option<i64>,

    /// Net investment earnings, gains and losses - two years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus2YrEndwmtFundGrp/InvestmentEarningsOrLossesAmt",
        line = "Part V Line 1c Column c"
    )]
    pub cy_minus2_investment_earnings_or_losses_amt: Option<i64>,

    /// Grants or scholarships - two years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus2YrEndwmtFundGrp/GrantsOrScholarshipsAmt",
        line = "Part V Line 1d Column c"
    )]
    pub cy_minus2_grants_or_scholarships_amt: Option<i64>,

    /// Other expenditures for facilities and programs - two years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus2YrEndwmtFundGrp/OtherExpendituresAmt",
        line = "Part V Line 1e Column c"
    )]
    pub cy_minus2_other_expenditures_amt: Option<i64>,

    /// Administrative expenses - two years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus2YrEndwmtFundGrp/AdministrativeExpensesAmt",
        line = "Part V Line 1f Column c"
    )]
    pub cy_minus2_administrative_expenses_amt: Option<i64>,

    /// End of year balance - two years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus2YrEndwmtFundGrp/EndYearBalanceAmt",
        line = "Part V Line 1g Column c"
    )]
    pub cy_minus2_end_year_balance_amt: Option<i64>,

    /// Beginning of year balance - three years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus3YrEndwmtFundGrp/BeginningYearBalanceAmt",
        line = "Part V Line 1a Column d"
    )]
    pub cy_minus3_beginning_year_balance_amt: Option<i64>,

    /// Contributions - three years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus3YrEndwmtFundGrp/ContributionsAmt",
        line = "Part V Line 1b Column d"
    )]
    pub cy_minus3_contributions_amt: Option<i64>,

    /// Net investment earnings, gains and losses - three years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus3YrEndwmtFundGrp/InvestmentEarningsOrLossesAmt",
        line = "Part V Line 1c Column d"
    )]
    pub cy_minus3_investment_earnings_or_losses_amt: Option<i64>,

    /// Grants or scholarships - three years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus3YrEndwmtFundGrp/GrantsOrScholarshipsAmt",
        line = "Part V Line 1d Column d"
    )]
    pub cy_minus3_grants_or_scholarships_amt: Option<i64>,

    /// Other expenditures for facilities and programs - three years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus3YrEndwmtFundGrp/OtherExpendituresAmt",
        line = "Part V Line 1e Column d"
    )]
    pub cy_minus3_other_expenditures_amt: Option<i64>,

    /// Administrative expenses - three years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus3YrEndwmtFundGrp/AdministrativeExpensesAmt",
        line = "Part V Line 1f Column d"
    )]
    pub cy_minus3_administrative_expenses_amt: Option<i64>,

    /// End of year balance - three years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus3YrEndwmtFundGrp/EndYearBalanceAmt",
        line = "Part V Line 1g Column d"
    )]
    pub cy_minus3_end_year_balance_amt: Option<i64>,

    /// Beginning of year balance - four years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus4YrEndwmtFundGrp/BeginningYearBalanceAmt",
        line = "Part V Line 1a Column e"
    )]
    pub cy_minus4_beginning_year_balance_amt: Option<i64>,

    /// Contributions - four years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus4YrEndwmtFundGrp/ContributionsAmt",
        line = "Part V Line 1b Column e"
    )]
    pub cy_minus4_contributions_amt: Option<i64>,

    /// Net investment earnings, gains and losses - four years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus4YrEndwmtFundGrp/InvestmentEarningsOrLossesAmt",
        line = "Part V Line 1c Column e"
    )]
    pub cy_minus4_investment_earnings_or_losses_amt: Option<i64>,

    /// Grants or scholarships - four years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus4YrEndwmtFundGrp/GrantsOrScholarshipsAmt",
        line = "Part V Line 1d Column e"
    )]
    pub cy_minus4_grants_or_scholarships_amt: Option<i64>,

    /// Other expenditures for facilities and programs - four years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus4YrEndwmtFundGrp/OtherExpendituresAmt",
        line = "Part V Line 1e Column e"
    )]
    pub cy_minus4_other_expenditures_amt: Option<i64>,

    /// Administrative expenses - four years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus4YrEndwmtFundGrp/AdministrativeExpensesAmt",
        line = "Part V Line 1f Column e"
    )]
    pub cy_minus4_administrative_expenses_amt: Option<i64>,

    /// End of year balance - four years back
    #[field(
        xpath = "/IRS990ScheduleD/CYMinus4YrEndwmtFundGrp/EndYearBalanceAmt",
        line = "Part V Line 1g Column e"
    )]
    pub cy_minus4_end_year_balance_amt: Option<i64>,

    /// Endowment funds held by unrelated organizations
    #[field(
        xpath = "/IRS990ScheduleD/EndowmentsHeldUnrelatedOrgInd",
        line = "Part V Line 3a(i)",
        max_length = 5
    )]
    pub endowments_held_unrelated_org_ind: Option<String>,

    /// Endowment funds held by related organizations
    #[field(
        xpath = "/IRS990ScheduleD/EndowmentsHeldRelatedOrgInd",
        line = "Part V Line 3a(ii)",
        max_length = 5
    )]
    pub endowments_held_related_org_ind: Option<String>,

    /// Related organizations listed on Schedule R
    #[field(xpath = "/IRS990ScheduleD/RelatedOrgListSchRInd", line = "Part V Line 3b", max_length = 5)]
    pub related_org_list_sch_r_ind: Option<String>,

    /// Intended uses of endowment funds
    #[field(xpath = "/IRS990ScheduleD/EndowmentFundsIntendedUseTxt", line = "Part V Line 4", long)]
    pub endowment_funds_intended_use_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_vi",
    form = "ScheduleD",
    part = "Part VI",
    description = "Land, buildings and equipment"
)]
pub struct PartVI {
    pub object_id: String,
    pub ein: String,

    /// Land - cost or other basis
    #[field(xpath = "/IRS990ScheduleD/LandGrp/OtherCostOrOtherBasisAmt", line = "Part VI Line 1a Column b")]
    pub land_cost_amt: Option<i64>,

    /// Land - book value
    #[field(xpath = "/IRS990ScheduleD/LandGrp/BookValueAmt", line = "Part VI Line 1a Column d")]
    pub land_book_value_amt: Option<i64>,

    /// Buildings - cost or other basis
    #[field(xpath = "/IRS990ScheduleD/BuildingsGrp/OtherCostOrOtherBasisAmt", line = "Part VI Line 1b Column b")]
    pub buildings_cost_amt: Option<i64>,

    /// Buildings - accumulated depreciation
    #[field(xpath = "/IRS990ScheduleD/BuildingsGrp/DepreciationAmt", line = "Part VI Line 1b Column c")]
    pub buildings_depreciation_amt: Option<i64>,

    /// Buildings - book value
    #[field(xpath = "/IRS990ScheduleD/BuildingsGrp/BookValueAmt", line = "Part VI Line 1b Column d")]
    pub buildings_book_value_amt: Option<i64>,

    /// Equipment - book value
    #[field(xpath = "/IRS990ScheduleD/EquipmentGrp/BookValueAmt", line = "Part VI Line 1d Column d")]
    pub equipment_book_value_amt: Option<i64>,

    /// Total book value of land, buildings and equipment
    #[field(xpath = "/IRS990ScheduleD/TotalBookValueLandBuildingsAmt", line = "Part VI Line 1e")]
    pub total_book_value_land_buildings_amt: Option<i64>,

    /// Land - cost or other basis (investment)
    #[field(
        xpath = "/IRS990ScheduleD/LandGrp/InvestmentCostOrOtherBasisAmt",
        line = "Part VI Line 1a Column a"
    )]
    pub land_investment_cost_or_other_basis_amt: Option<i64>,

    /// Land - accumulated depreciation
    #[field(xpath = "/IRS990ScheduleD/LandGrp/DepreciationAmt", line = "Part VI Line 1a Column c")]
    pub land_depreciation_amt: Option<i64>,

    /// Buildings - cost or other basis (investment)
    #[field(
        xpath = "/IRS990ScheduleD/BuildingsGrp/InvestmentCostOrOtherBasisAmt",
        line = "Part VI Line 1b Column a"
    )]
    pub buildings_investment_cost_or_other_basis_amt: Option<i64>,

    /// Leasehold improvements - cost or other basis (investment)
    #[field(
        xpath = "/IRS990ScheduleD/LeaseholdImprovementsGrp/InvestmentCostOrOtherBasisAmt",
        line = "Part VI Line 1c Column a"
    )]
    pub leasehold_improvements_investment_cost_or_other_basis_amt: Option<i64>,

    /// Leasehold improvements - cost or other basis (other)
    #[field(
        xpath = "/IRS990ScheduleD/LeaseholdImprovementsGrp/OtherCostOrOtherBasisAmt",
        line = "Part VI Line 1c Column b"
    )]
    pub leasehold_improvements_other_cost_or_other_basis_amt: Option<i64>,

    /// Leasehold improvements - accumulated depreciation
    #[field(
        xpath = "/IRS990ScheduleD/LeaseholdImprovementsGrp/DepreciationAmt",
        line = "Part VI Line 1c Column c"
    )]
    pub leasehold_improvements_depreciation_amt: Option<i64>,

    /// Leasehold improvements - book value
    #[field(
        xpath = "/IRS990ScheduleD/LeaseholdImprovementsGrp/BookValueAmt",
        line = "Part VI Line 1c Column d"
    )]
    pub leasehold_improvements_book_value_amt: Option<i64>,

    /// Equipment - cost or other basis (investment)
    #[field(
        xpath = "/IRS990ScheduleD/EquipmentGrp/InvestmentCostOrOtherBasisAmt",
        line = "Part VI Line 1d Column a"
    )]
    pub equipment_investment_cost_or_other_basis_amt: Option<i64>,

    /// Equipment - cost or other basis (other)
    #[field(
        xpath = "/IRS990ScheduleD/EquipmentGrp/OtherCostOrOtherBasisAmt",
        line = "Part VI Line 1d Column b"
    )]
    pub equipment_other_cost_or_other_basis_amt: Option<i64>,

    /// Equipment - accumulated depreciation
    #[field(xpath = "/IRS990ScheduleD/EquipmentGrp/DepreciationAmt", line = "Part VI Line 1d Column c")]
    pub equipment_depreciation_amt: Option<i64>,

    /// Other - cost or other basis (investment)
    #[field(
        xpath = "/IRS990ScheduleD/OtherLandBuildingsGrp/InvestmentCostOrOtherBasisAmt",
        line = "Part VI Line 1e Column a"
    )]
    pub other_land_buildings_investment_cost_or_other_basis_amt: Option<i64>,

    /// Other - cost or other basis (other)
    #[field(
        xpath = "/IRS990ScheduleD/OtherLandBuildingsGrp/OtherCostOrOtherBasisAmt",
        line = "Part VI Line 1e Column b"
    )]
    pub other_land_buildings_other_cost_or_other_basis_amt: Option<i64>,

    /// Other - accumulated depreciation
    #[field(
        xpath = "/IRS990ScheduleD/OtherLandBuildingsGrp/DepreciationAmt",
        line = "Part VI Line 1e Column c"
    )]
    pub other_land_buildings_depreciation_amt: Option<i64>,

    /// Other - book value
    #[field(xpath = "/IRS990ScheduleD/OtherLandBuildingsGrp/BookValueAmt", line = "Part VI Line 1e Column d")]
    pub other_land_buildings_book_value_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_vii",
    form = "ScheduleD",
    part = "Part VII",
    description = "Investments - other securities"
)]
pub struct PartVII {
    pub object_id: String,
    pub ein: String,

    /// Financial derivatives - book value
    #[field(
        xpath = "/IRS990ScheduleD/FinancialDerivativesGrp/BookValueAmt",
        line = "Part VII Line 1 Column b"
    )]
    pub financial_derivatives_book_value_amt: Option<i64>,

    /// Financial derivatives - method of valuation
    #[field(
        xpath = "/IRS990ScheduleD/FinancialDerivativesGrp/MethodValuationCd",
        line = "Part VII Line 1 Column c"
    )]
    pub financial_derivatives_method_valuation_cd: Option<String>,

    /// Closely held equity interests - book value
    #[field(
        xpath = "/IRS990ScheduleD/CloselyHeldEquityInterestsGrp/BookValueAmt",
        line = "Part VII Line 2 Column b"
    )]
    pub closely_held_equity_interests_book_value_amt: Option<i64>,

    /// Closely held equity interests - method of valuation
    #[field(
        xpath = "/IRS990ScheduleD/CloselyHeldEquityInterestsGrp/MethodValuationCd",
        line = "Part VII Line 2 Column c"
    )]
    pub closely_held_equity_interests_method_valuation_cd: Option<String>,

    /// Total book value of other securities
    #[field(xpath = "/IRS990ScheduleD/TotalBookValueSecuritiesAmt", line = "Part VII Line 3 Column b")]
    pub total_book_value_securities_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_othrscrts",
    form = "ScheduleD",
    part = "Part VII",
    description = "Other securities",
    group = "/IRS990ScheduleD/OtherSecuritiesGrp",
    parent = "return_skedd_part_vii"
)]
pub struct OtherSecurities {
    pub object_id: String,
    pub ein: String,

    /// Description of security or category
    #[field(xpath = "/IRS990ScheduleD/OtherSecuritiesGrp/Desc", line = "Part VII Line 3 Column a", long)]
    pub desc: Option<String>,

    /// Book value
    #[field(xpath = "/IRS990ScheduleD/OtherSecuritiesGrp/BookValueAmt", line = "Part VII Line 3 Column b")]
    pub book_value_amt: Option<i64>,

    /// Method of valuation
    #[field(
        xpath = "/IRS990ScheduleD/OtherSecuritiesGrp/MethodValuationCd",
        line = "Part VII Line 3 Column c",
        max_length = 4
    )]
    pub method_valuation_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_viii",
    form = "ScheduleD",
    part = "Part VIII",
    description = "Investments - program related"
)]
pub struct PartVIII {
    pub object_id: String,
    pub ein: String,

    /// Total book value of program-related investments
    #[field(xpath = "/IRS990ScheduleD/TotalBookValueProgramRltdAmt", line = "Part VIII Line 1 Column b")]
    pub total_book_value_program_rltd_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_invstprgrmrltdorg",
    form = "ScheduleD",
    part = "Part VIII",
    description = "Program-related investments",
    group = "/IRS990ScheduleD/InvstProgramRelatedOrgGrp",
    parent = "return_skedd_part_viii"
)]
pub struct InvstProgramRelatedOrg {
    pub object_id: String,
    pub ein: String,

    /// Type of investment
    #[field(
        xpath = "/IRS990ScheduleD/InvstProgramRelatedOrgGrp/Desc",
        line = "Part VIII Line 1 Column a",
        long
    )]
    pub desc: Option<String>,

    /// Book value
    #[field(
        xpath = "/IRS990ScheduleD/InvstProgramRelatedOrgGrp/BookValueAmt",
        line = "Part VIII Line 1 Column b"
    )]
    pub book_value_amt: Option<i64>,

    /// Method of valuation
    #[field(
        xpath = "/IRS990ScheduleD/InvstProgramRelatedOrgGrp/MethodValuationCd",
        line = "Part VIII Line 1 Column c",
        max_length = 4
    )]
    pub method_valuation_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_ix",
    form = "ScheduleD",
    part = "Part IX",
    description = "Other assets"
)]
pub struct PartIX {
    pub object_id: String,
    pub ein: String,

    /// Total book value of other assets
    #[field(xpath = "/IRS990ScheduleD/TotalBookValueOtherAssetsAmt", line = "Part IX Line 2 Column b")]
    pub total_book_value_other_assets_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_othrasstsorg",
    form = "ScheduleD",
    part = "Part IX",
    description = "Other assets",
    group = "/IRS990ScheduleD/OtherAssetsOrgGrp",
    parent = "return_skedd_part_ix"
)]
pub struct OtherAssetsOrg {
    pub object_id: String,
    pub ein: String,

    /// Description
    #[field(xpath = "/IRS990ScheduleD/OtherAssetsOrgGrp/Desc", line = "Part IX Line 1 Column a", long)]
    pub desc: Option<String>,

    /// Book value
    #[field(xpath = "/IRS990ScheduleD/OtherAssetsOrgGrp/BookValueAmt", line = "Part IX Line 1 Column b")]
    pub book_value_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_x",
    form = "ScheduleD",
    part = "Part X",
    description = "Other liabilities"
)]
pub struct PartX {
    pub object_id: String,
    pub ein: String,

    /// Federal income taxes
    #[field(xpath = "/IRS990ScheduleD/FederalIncomeTaxLiabilityAmt", line = "Part X Line 1 Column b")]
    pub federal_income_tax_liability_amt: Option<i64>,

    /// Total other liabilities
    #[field(xpath = "/IRS990ScheduleD/TotalBookValueLiabilitiesAmt", line = "Part X Line 1 Column b")]
    pub total_book_value_liabilities_amt: Option<i64>,

    /// Footnote to financial statements addresses uncertain tax positions
    #[field(xpath = "/IRS990ScheduleD/FootnoteTextInd", line = "Part X Line 2", max_length = 5)]
    pub footnote_text_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_othrlbltsorg",
    form = "ScheduleD",
    part = "Part X",
    description = "Other liabilities",
    group = "/IRS990ScheduleD/OtherLiabilitiesOrgGrp"
)]
pub struct OtherLiabilitiesOrg {
    pub object_id: String,
    pub ein: String,

    /// Type of liability
    #[field(xpath = "/IRS990ScheduleD/OtherLiabilitiesOrgGrp/Desc", line = "Part X Line 1 Column a")]
    pub desc: Option<String>,

    /// Book value
    #[field(xpath = "/IRS990ScheduleD/OtherLiabilitiesOrgGrp/Amt", line = "Part X Line 1 Column b")]
    pub amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_xi",
    form = "ScheduleD",
    part = "Part XI",
    description = "Reconciliation of revenue per audited financial statements with revenue per return"
)]
pub struct PartXI {
    pub object_id: String,
    pub ein: String,

    /// Total revenue, gains and other support per audited financial statements
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/TotalRevEtcAuditedFinclStmtAmt",
        line = "Part XI Line 1"
    )]
    pub total_rev_etc_audited_fincl_stmt_amt: Option<i64>,

    /// Net unrealized gains or losses on investments
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/NetUnrlzdGainsLossesInvstAmt",
        line = "Part XI Line 2a"
    )]
    pub net_unrlzd_gains_losses_invst_amt: Option<i64>,

    /// Donated services and use of facilities
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/DonatedServicesAndUseFcltsAmt",
        line = "Part XI Line 2b"
    )]
    pub donated_services_and_use_fclts_amt: Option<i64>,

    /// Recoveries of prior year grants
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/RecoveriesPriorYearGrantsAmt",
        line = "Part XI Line 2c"
    )]
    pub recoveries_prior_year_grants_amt: Option<i64>,

    /// Other revenue
    #[field(xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/OtherRevenueAmt", line = "Part XI Line 2d")]
    pub other_revenue_amt: Option<i64>,

    /// Add lines 2a through 2d
    #[field(xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/TotalRevenueAmt", line = "Part XI Line 2e")]
    pub total_revenue_amt: Option<i64>,

    /// Subtract line 2e from line 1
    #[field(xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/SubtotalAmt", line = "Part XI Line 3")]
    pub subtotal_amt: Option<i64>,

    /// Investment expenses not included on Form 990, Part VIII
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/InvestmentExpensesNotIncldAmt",
        line = "Part XI Line 4a"
    )]
    pub investment_expenses_not_incld_amt: Option<i64>,

    /// Other revenue not included
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/OtherRevenueNotIncludedAmt",
        line = "Part XI Line 4b"
    )]
    pub other_revenue_not_included_amt: Option<i64>,

    /// Add lines 4a and 4b
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/TotalRevNotReportedOnFSAmt",
        line = "Part XI Line 4c"
    )]
    pub total_rev_not_reported_on_fs_amt: Option<i64>,

    /// Total revenue per Form 990, Part I, line 12
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationRevenueGrp/TotalRevenuePerForm990Amt",
        line = "Part XI Line 5"
    )]
    pub total_revenue_per_form_990_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_part_xii",
    form = "ScheduleD",
    part = "Part XII",
    description = "Reconciliation of expenses per audited financial statements with expenses per return"
)]
pub struct PartXII {
    pub object_id: String,
    pub ein: String,

    /// Total expenses and losses per audited financial statements
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/TotExpnsEtcAuditedFinclStmtAmt",
        line = "Part XII Line 1"
    )]
    pub tot_expns_etc_audited_fincl_stmt_amt: Option<i64>,

    /// Donated services and use of facilities
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/DonatedServicesAndUseFcltsAmt",
        line = "Part XII Line 2a"
    )]
    pub donated_services_and_use_fclts_amt: Option<i64>,

    /// Prior year adjustments
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/PriorYearAdjustmentsAmt",
        line = "Part XII Line 2b"
    )]
    pub prior_year_adjustments_amt: Option<i64>,

    /// Other losses
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/LossesReportedAmt",
        line = "Part XII Line 2c"
    )]
    pub losses_reported_amt: Option<i64>,

    /// Other expenses
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/OtherExpensesIncludedAmt",
        line = "Part XII Line 2d"
    )]
    pub other_expenses_included_amt: Option<i64>,

    /// Add lines 2a through 2d
    #[field(xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/TotalExpensesAmt", line = "Part XII Line 2e")]
    pub total_expenses_amt: Option<i64>,

    /// Subtract line 2e from line 1
    #[field(xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/SubtotalAmt", line = "Part XII Line 3")]
    pub subtotal_amt: Option<i64>,

    /// Investment expenses not included on Form 990, Part VIII
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/InvestmentExpensesNotIncldAmt",
        line = "Part XII Line 4a"
    )]
    pub investment_expenses_not_incld_amt: Option<i64>,

    /// Other expenses not included
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/OtherExpensesNotIncludedAmt",
        line = "Part XII Line 4b"
    )]
    pub other_expenses_not_included_amt: Option<i64>,

    /// Add lines 4a and 4b
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/TotalExpensesNotRptFSAmt",
        line = "Part XII Line 4c"
    )]
    pub total_expenses_not_rpt_fs_amt: Option<i64>,

    /// Total expenses per Form 990, Part I, line 18
    #[field(
        xpath = "/IRS990ScheduleD/ReconciliationExpensesGrp/TotalExpensesPerForm990Amt",
        line = "Part XII Line 5"
    )]
    pub total_expenses_per_form_990_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedd_spplmntlinfrmtndtl",
    form = "ScheduleD",
    part = "Part XIII",
    description = "Supplemental information",
    group = "/IRS990ScheduleD/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(xpath = "/IRS990ScheduleD/SupplementalInformationDetail/FormAndLineReferenceDesc", line = "Part XIII")]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleD/SupplementalInformationDetail/ExplanationTxt", line = "Part XIII", long)]
    pub explanation_txt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormTable};

    #[test]
    fn test_endowment_years_share_one_row() {
        let table = PartV::definition();
        assert!(!table.is_repeating());
        assert!(table.has_column("CYEndwmtFnd_BgnnngYrBlncAmt"));
        assert!(table.has_column("CYMns4YrEndwmtFnd_EndYrBlncAmt"));
    }

    #[test]
    fn test_schedule_lines_nest_under_their_part() {
        let securities = OtherSecurities::definition();
        assert_eq!(securities.parent(), Some("return_skedd_part_vii"));
        let method = securities.column("MthdVltnCd").expect("valuation method");
        assert_eq!(method.field_type, FieldType::ShortText);
        assert_eq!(method.max_length, Some(4));
        assert!(PartXI::definition().has_column("RcncltnRvn_TtlRvnPrFrm990Amt"));
    }
}
