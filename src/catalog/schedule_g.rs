//! Schedule G: Supplemental Information Regarding Fundraising or Gaming Activities.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        FundraiserActivityInfo::definition(),
        PartII::definition(),
        PartIII::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedg_part_i",
    form = "ScheduleG",
    part = "Part I",
    description = "Fundraising activities"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Mail solicitations
    #[field(xpath = "/IRS990ScheduleG/MailSolicitationsInd", line = "Part I Line 1a", max_length = 5)]
    pub mail_solicitations_ind: Option<String>,

    /// Internet and email solicitations
    #[field(xpath = "/IRS990ScheduleG/EmailSolicitationsInd", line = "Part I Line 1b", max_length = 5)]
    pub email_solicitations_ind: Option<String>,

    /// Phone solicitations
    #[field(xpath = "/IRS990ScheduleG/PhoneSolicitationsInd", line = "Part I Line 1c", max_length = 5)]
    pub phone_solicitations_ind: Option<String>,

    /// In-person solicitations
    #[field(xpath = "/IRS990ScheduleG/InPersonSolicitationsInd", line = "Part I Line 1d", max_length = 5)]
    pub in_person_solicitations_ind: Option<String>,

    /// Solicitation of non-government grants
    #[field(
        xpath = "/IRS990ScheduleG/SolicitationOfNonGovtGrantsInd",
        line = "Part I Line 1e",
        max_length = 5
    )]
    pub solicitation_of_non_govt_grants_ind: Option<String>,

    /// Solicitation of government grants
    #[field(xpath = "/IRS990ScheduleG/SolicitationOfGovtGrantsInd", line = "Part I Line 1f", max_length = 5)]
    pub solicitation_of_govt_grants_ind: Option<String>,

    /// Special fundraising events
    #[field(xpath = "/IRS990ScheduleG/SpecialFundraisingEventsInd", line = "Part I Line 1g", max_length = 5)]
    pub special_fundraising_events_ind: Option<String>,

    /// Written or oral agreement with a professional fundraiser
    #[field(
        xpath = "/IRS990ScheduleG/AgreementProfessionalFundrsngInd",
        line = "Part I Line 2a",
        max_length = 5
    )]
    pub agreement_professional_fundrsng_ind: Option<String>,

    /// Total gross receipts
    #[field(xpath = "/IRS990ScheduleG/TotalGrossReceiptsAmt", line = "Part I Line 3 Column iv")]
    pub total_gross_receipts_amt: Option<i64>,

    /// Total retained by fundraisers
    #[field(xpath = "/IRS990ScheduleG/TotalRetainedByContractorAmt", line = "Part I Line 3 Column v")]
    pub total_retained_by_contractor_amt: Option<i64>,

    /// Total net to organization
    #[field(xpath = "/IRS990ScheduleG/TotalNetToOrganizationAmt", line = "Part I Line 3 Column vi")]
    pub total_net_to_organization_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedg_fndrsractvtyinf",
    form = "ScheduleG",
    part = "Part I",
    description = "Professional fundraisers",
    group = "/IRS990ScheduleG/FundraiserActivityInfoGrp",
    parent = "return_skedg_part_i"
)]
pub struct FundraiserActivityInfo {
    pub object_id: String,
    pub ein: String,

    /// Name of fundraiser (person)
    #[field(xpath = "/IRS990ScheduleG/FundraiserActivityInfoGrp/OrganizationIndividualNm", line = "Part I Line 3 Column i")]
    pub organization_individual_nm: Option<String>,

    /// Name of fundraiser (business)
    #[field(
        xpath = "/IRS990ScheduleG/FundraiserActivityInfoGrp/OrganizationBusinessName/BusinessNameLine1Txt",
        line = "Part I Line 3 Column i"
    )]
    pub organization_business_name_txt: Option<String>,

    /// Activity
    #[field(xpath = "/IRS990ScheduleG/FundraiserActivityInfoGrp/ActivityTxt", line = "Part I Line 3 Column ii")]
    pub activity_txt: Option<String>,

    /// Fundraiser had custody or control of contributions
    #[field(xpath = "/IRS990ScheduleG/FundraiserActivityInfoGrp/FundraiserControlOfFundsInd", line = "Part I Line 3 Column iii", max_length = 5)]
    pub fundraiser_control_of_funds_ind: Option<String>,

    /// Gross receipts from activity
    #[field(xpath = "/IRS990ScheduleG/FundraiserActivityInfoGrp/GrossReceiptsAmt", line = "Part I Line 3 Column iv")]
    pub gross_receipts_amt: Option<i64>,

    /// Amount paid to the fundraiser
    #[field(xpath = "/IRS990ScheduleG/FundraiserActivityInfoGrp/RetainedByContractorAmt", line = "Part I Line 3 Column v")]
    pub retained_by_contractor_amt: Option<i64>,

    /// Amount paid to the organization
    #[field(xpath = "/IRS990ScheduleG/FundraiserActivityInfoGrp/NetToOrganizationAmt", line = "Part I Line 3 Column vi")]
    pub net_to_organization_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedg_part_ii",
    form = "ScheduleG",
    part = "Part II",
    description = "Fundraising events"
)]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Type of first event
    #[field(xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/EventTypeTxt", line = "Part II Column a")]
    pub event_type_txt: Option<String>,

    /// Gross receipts of first event
    #[field(xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossReceiptsEvent1Amt", line = "Part II Line 1 Column a")]
    pub gross_receipts_event1_amt: Option<i64>,

    /// Total gross receipts of all events
    #[field(xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossReceiptsTotalAmt", line = "Part II Line 1 Column d")]
    pub gross_receipts_total_amt: Option<i64>,

    /// Total gross income
    #[field(xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossRevenueTotalEventsAmt", line = "Part II Line 3 Column d")]
    pub gross_revenue_total_events_amt: Option<i64>,

    /// Total direct expenses
    #[field(xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/TotalDirectExpensesAmt", line = "Part II Line 10 Column d")]
    pub total_direct_expenses_amt: Option<i64>,

    /// Net income summary
    #[field(xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/NetIncomeSummaryAmt", line = "Part II Line 11")]
    pub net_income_summary_amt: Option<i64>,

    /// Number of other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/OtherEventsTotalCnt",
        line = "Part II Column c"
    )]
    pub other_events_total_cnt: Option<i32>,

    /// Gross receipts - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossReceiptsEvent2Amt",
        line = "Part II Line 1 Column b"
    )]
    pub gross_receipts_event_2_amt: Option<i64>,

    /// Gross receipts - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossReceiptsOtherEventsAmt",
        line = "Part II Line 1 Column c"
    )]
    pub gross_receipts_other_events_amt: Option<i64>,

    /// Charitable contributions - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CharitableContriEvent1Amt",
        line = "Part II Line 2 Column a"
    )]
    pub charitable_contri_event_1_amt: Option<i64>,

    /// Charitable contributions - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CharitableContriEvent2Amt",
        line = "Part II Line 2 Column b"
    )]
    pub charitable_contri_event_2_amt: Option<i64>,

    /// Charitable contributions - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CharitableContriOtherEventsAmt",
        line = "Part II Line 2 Column c"
    )]
    pub charitable_contri_other_events_amt: Option<i64>,

    /// Charitable contributions - total
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CharitableContriTotalAmt",
        line = "Part II Line 2 Column d"
    )]
    pub charitable_contri_total_amt: Option<i64>,

    /// Gross income - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossRevenueEvent1Amt",
        line = "Part II Line 3 Column a"
    )]
    pub gross_revenue_event_1_amt: Option<i64>,

    /// Gross income - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossRevenueEvent2Amt",
        line = "Part II Line 3 Column b"
    )]
    pub gross_revenue_event_2_amt: Option<i64>,

    /// Gross income - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/GrossRevenueOtherEventsAmt",
        line = "Part II Line 3 Column c"
    )]
    pub gross_revenue_other_events_amt: Option<i64>,

    /// Cash prizes - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CashPrizesEvent1Amt",
        line = "Part II Line 4 Column a"
    )]
    pub cash_prizes_event_1_amt: Option<i64>,

    /// Cash prizes - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CashPrizesEvent2Amt",
        line = "Part II Line 4 Column b"
    )]
    pub cash_prizes_event_2_amt: Option<i64>,

    /// Cash prizes - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CashPrizesOtherEventsAmt",
        line = "Part II Line 4 Column c"
    )]
    pub cash_prizes_other_events_amt: Option<i64>,

    /// Cash prizes - total
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/CashPrizesTotalAmt",
        line = "Part II Line 4 Column d"
    )]
    pub cash_prizes_total_amt: Option<i64>,

    /// Noncash prizes - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/NoncashPrizesEvent1Amt",
        line = "Part II Line 5 Column a"
    )]
    pub noncash_prizes_event_1_amt: Option<i64>,

    /// Noncash prizes - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/NoncashPrizesEvent2Amt",
        line = "Part II Line 5 Column b"
    )]
    pub noncash_prizes_event_2_amt: Option<i64>,

    /// Noncash prizes - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/NoncashPrizesOtherEventsAmt",
        line = "Part II Line 5 Column c"
    )]
    pub noncash_prizes_other_events_amt: Option<i64>,

    /// Noncash prizes - total
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/NoncashPrizesTotalAmt",
        line = "Part II Line 5 Column d"
    )]
    pub noncash_prizes_total_amt: Option<i64>,

    /// Rent and facility costs - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/RentFacilityCostsEvent1Amt",
        line = "Part II Line 6 Column a"
    )]
    pub rent_facility_costs_event_1_amt: Option<i64>,

    /// Rent and facility costs - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/RentFacilityCostsEvent2Amt",
        line = "Part II Line 6 Column b"
    )]
    pub rent_facility_costs_event_2_amt: Option<i64>,

    /// Rent and facility costs - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/RentFacilityCostsOtherEventsAmt",
        line = "Part II Line 6 Column c"
    )]
    pub rent_facility_costs_other_events_amt: Option<i64>,

    /// Rent and facility costs - total
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/RentFacilityCostsTotalAmt",
        line = "Part II Line 6 Column d"
    )]
    pub rent_facility_costs_total_amt: Option<i64>,

    /// Food and beverages - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/FoodAndBeverageEvent1Amt",
        line = "Part II Line 7 Column a"
    )]
    pub food_and_beverage_event_1_amt: Option<i64>,

    /// Food and beverages - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/FoodAndBeverageEvent2Amt",
        line = "Part II Line 7 Column b"
    )]
    pub food_and_beverage_event_2_amt: Option<i64>,

    /// Food and beverages - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/FoodAndBeverageOtherEventsAmt",
        line = "Part II Line 7 Column c"
    )]
    pub food_and_beverage_other_events_amt: Option<i64>,

    /// Food and beverages - total
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/FoodAndBeverageTotalAmt",
        line = "Part II Line 7 Column d"
    )]
    pub food_and_beverage_total_amt: Option<i64>,

    /// Entertainment - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/EntertainmentEvent1Amt",
        line = "Part II Line 8 Column a"
    )]
    pub entertainment_event_1_amt: Option<i64>,

    /// Entertainment - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/EntertainmentEvent2Amt",
        line = "Part II Line 8 Column b"
    )]
    pub entertainment_event_2_amt: Option<i64>,

    /// Entertainment - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/EntertainmentOtherEventsAmt",
        line = "Part II Line 8 Column c"
    )]
    pub entertainment_other_events_amt: Option<i64>,

    /// Entertainment - total
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/EntertainmentTotalAmt",
        line = "Part II Line 8 Column d"
    )]
    pub entertainment_total_amt: Option<i64>,

    /// Other direct expenses - event 1
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/OtherDirectExpensesEvent1Amt",
        line = "Part II Line 9 Column a"
    )]
    pub other_direct_expenses_event_1_amt: Option<i64>,

    /// Other direct expenses - event 2
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/OtherDirectExpensesEvent2Amt",
        line = "Part II Line 9 Column b"
    )]
    pub other_direct_expenses_event_2_amt: Option<i64>,

    /// Other direct expenses - other events
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/OtherDirectExpensesOtherEventsAmt",
        line = "Part II Line 9 Column c"
    )]
    pub other_direct_expenses_other_events_amt: Option<i64>,

    /// Other direct expenses - total
    #[field(
        xpath = "/IRS990ScheduleG/FundraisingEventInformationGrp/OtherDirectExpensesTotalAmt",
        line = "Part II Line 9 Column d"
    )]
    pub other_direct_expenses_total_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedg_part_iii",
    form = "ScheduleG",
    part = "Part III",
    description = "Gaming"
)]
pub struct PartIII {
    pub object_id: String,
    pub ein: String,

    /// Gross income - bingo
    #[field(xpath = "/IRS990ScheduleG/GamingGrossIncomeGrp/BingoAmt", line = "Part III Line 1 Column a")]
    pub gaming_gross_income_bingo_amt: Option<i64>,

    /// Gross income - pull tabs, instant bingo, progressive bingo
    #[field(
        xpath = "/IRS990ScheduleG/GamingGrossIncomeGrp/PullTabsEtcAmt",
        line = "Part III Line 1 Column b"
    )]
    pub gaming_gross_income_pull_tabs_etc_amt: Option<i64>,

    /// Gross income - other gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingGrossIncomeGrp/OtherGamingAmt",
        line = "Part III Line 1 Column c"
    )]
    pub gaming_gross_income_other_gaming_amt: Option<i64>,

    /// Gross income - total gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingGrossIncomeGrp/TotalGamingAmt",
        line = "Part III Line 1 Column d"
    )]
    pub gaming_gross_income_total_gaming_amt: Option<i64>,

    /// Cash prizes - bingo
    #[field(xpath = "/IRS990ScheduleG/GamingCashPrizesGrp/BingoAmt", line = "Part III Line 2 Column a")]
    pub gaming_cash_prizes_bingo_amt: Option<i64>,

    /// Cash prizes - pull tabs, instant bingo, progressive bingo
    #[field(xpath = "/IRS990ScheduleG/GamingCashPrizesGrp/PullTabsEtcAmt", line = "Part III Line 2 Column b")]
    pub gaming_cash_prizes_pull_tabs_etc_amt: Option<i64>,

    /// Cash prizes - other gaming
    #[field(xpath = "/IRS990ScheduleG/GamingCashPrizesGrp/OtherGamingAmt", line = "Part III Line 2 Column c")]
    pub gaming_cash_prizes_other_gaming_amt: Option<i64>,

    /// Cash prizes - total gaming
    #[field(xpath = "/IRS990ScheduleG/GamingCashPrizesGrp/TotalGamingAmt", line = "Part III Line 2 Column d")]
    pub gaming_cash_prizes_total_gaming_amt: Option<i64>,

    /// Noncash prizes - bingo
    #[field(xpath = "/IRS990ScheduleG/GamingNonCashPrizesGrp/BingoAmt", line = "Part III Line 3 Column a")]
    pub gaming_non_cash_prizes_bingo_amt: Option<i64>,

    /// Noncash prizes - pull tabs, instant bingo, progressive bingo
    #[field(
        xpath = "/IRS990ScheduleG/GamingNonCashPrizesGrp/PullTabsEtcAmt",
        line = "Part III Line 3 Column b"
    )]
    pub gaming_non_cash_prizes_pull_tabs_etc_amt: Option<i64>,

    /// Noncash prizes - other gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingNonCashPrizesGrp/OtherGamingAmt",
        line = "Part III Line 3 Column c"
    )]
    pub gaming_non_cash_prizes_other_gaming_amt: Option<i64>,

    /// Noncash prizes - total gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingNonCashPrizesGrp/TotalGamingAmt",
        line = "Part III Line 3 Column d"
    )]
    pub gaming_non_cash_prizes_total_gaming_amt: Option<i64>,

    /// Rent and facility costs - bingo
    #[field(
        xpath = "/IRS990ScheduleG/GamingRentFacilityCostsGrp/BingoAmt",
        line = "Part III Line 4 Column a"
    )]
    pub gaming_rent_facility_costs_bingo_amt: Option<i64>,

    /// Rent and facility costs - pull tabs, instant bingo, progressive bingo
    #[field(
        xpath = "/IRS990ScheduleG/GamingRentFacilityCostsGrp/PullTabsEtcAmt",
        line = "Part III Line 4 Column b"
    )]
    pub gaming_rent_facility_costs_pull_tabs_etc_amt: Option<i64>,

    /// Rent and facility costs - other gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingRentFacilityCostsGrp/OtherGamingAmt",
        line = "Part III Line 4 Column c"
    )]
    pub gaming_rent_facility_costs_other_gaming_amt: Option<i64>,

    /// Rent and facility costs - total gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingRentFacilityCostsGrp/TotalGamingAmt",
        line = "Part III Line 4 Column d"
    )]
    pub gaming_rent_facility_costs_total_gaming_amt: Option<i64>,

    /// Other direct expenses - bingo
    #[field(
        xpath = "/IRS990ScheduleG/GamingOtherDirectExpensesGrp/BingoAmt",
        line = "Part III Line 5 Column a"
    )]
    pub gaming_other_direct_expenses_bingo_amt: Option<i64>,

    /// Other direct expenses - pull tabs, instant bingo, progressive bingo
    #[field(
        xpath = "/IRS990ScheduleG/GamingOtherDirectExpensesGrp/PullTabsEtcAmt",
        line = "Part III Line 5 Column b"
    )]
    pub gaming_other_direct_expenses_pull_tabs_etc_amt: Option<i64>,

    /// Other direct expenses - other gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingOtherDirectExpensesGrp/OtherGamingAmt",
        line = "Part III Line 5 Column c"
    )]
    pub gaming_other_direct_expenses_other_gaming_amt: Option<i64>,

    /// Other direct expenses - total gaming
    #[field(
        xpath = "/IRS990ScheduleG/GamingOtherDirectExpensesGrp/TotalGamingAmt",
        line = "Part III Line 5 Column d"
    )]
    pub gaming_other_direct_expenses_total_gaming_amt: Option<i64>,

    /// Volunteer labor - bingo
    #[field(
        xpath = "/IRS990ScheduleG/VolunteerLaborBingoInd",
        line = "Part III Line 6 Column a",
        max_length = 5
    )]
    pub volunteer_labor_bingo_ind: Option<String>,

    /// Volunteer labor - pull tabs
    #[field(
        xpath = "/IRS990ScheduleG/VolunteerLaborPullTabsInd",
        line = "Part III Line 6 Column b",
        max_length = 5
    )]
    pub volunteer_labor_pull_tabs_ind: Option<String>,

    /// Volunteer labor - other gaming
    #[field(
        xpath = "/IRS990ScheduleG/VolunteerLaborOtherGamingInd",
        line = "Part III Line 6 Column c",
        max_length = 5
    )]
    pub volunteer_labor_other_gaming_ind: Option<String>,

    /// Direct expense summary
    #[field(xpath = "/IRS990ScheduleG/DirectExpenseSummaryAmt", line = "Part III Line 7 Column d")]
    pub direct_expense_summary_amt: Option<i64>,

    /// Net gaming income summary
    #[field(xpath = "/IRS990ScheduleG/NetGamingIncomeSummaryAmt", line = "Part III Line 8 Column d")]
    pub net_gaming_income_summary_amt: Option<i64>,

    /// Licensed to conduct gaming activities in each state
    #[field(xpath = "/IRS990ScheduleG/GamingLicenseInd", line = "Part III Line 9b", max_length = 5)]
    pub gaming_license_ind: Option<String>,

    /// Gaming license suspended, revoked or terminated
    #[field(xpath = "/IRS990ScheduleG/LicenseSuspendedEtcInd", line = "Part III Line 10a", max_length = 5)]
    pub license_suspended_etc_ind: Option<String>,

    /// Gaming conducted with nonmembers
    #[field(xpath = "/IRS990ScheduleG/GamingWithNonmembersInd", line = "Part III Line 11", max_length = 5)]
    pub gaming_with_nonmembers_ind: Option<String>,

    /// Member of an entity formed to administer charitable gaming
    #[field(xpath = "/IRS990ScheduleG/MemberOfOtherEntityInd", line = "Part III Line 12", max_length = 5)]
    pub member_of_other_entity_ind: Option<String>,

    /// Percentage of gaming conducted in the organization's facility
    #[field(xpath = "/IRS990ScheduleG/GamingOwnFacilityPct", line = "Part III Line 13a")]
    pub gaming_own_facility_pct: Option<f64>,

    /// Percentage of gaming conducted in an outside facility
    #[field(xpath = "/IRS990ScheduleG/GamingOtherFacilityPct", line = "Part III Line 13b")]
    pub gaming_other_facility_pct: Option<f64>,

    /// Gaming manager compensation
    #[field(xpath = "/IRS990ScheduleG/GamingManagerCompensationAmt", line = "Part III Line 15b")]
    pub gaming_manager_compensation_amt: Option<i64>,

    /// State law requires distribution of gaming proceeds
    #[field(
        xpath = "/IRS990ScheduleG/CharitableDistributionRqrInd",
        line = "Part III Line 16",
        max_length = 5
    )]
    pub charitable_distribution_rqr_ind: Option<String>,

    /// Distributions made as a percentage of gaming income
    #[field(xpath = "/IRS990ScheduleG/DistributionsMadePct", line = "Part III Line 17b")]
    pub distributions_made_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedg_spplmntlinfrmtndtl",
    form = "ScheduleG",
    part = "Part IV",
    description = "Supplemental information",
    group = "/IRS990ScheduleG/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleG/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part IV"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleG/SupplementalInformationDetail/ExplanationTxt", line = "Part IV", long)]
    pub explanation_txt: Option<String>,
}
