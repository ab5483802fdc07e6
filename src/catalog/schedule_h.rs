//! Schedule H: Hospitals.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        PartII::definition(),
        PartIII::definition(),
        ManagementCoAndJointVentures::definition(),
        HospitalFacilities::definition(),
        HospitalFcltyPoliciesPrctc::definition(),
        OtherHealthCareFacilities::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_part_i",
    form = "ScheduleH",
    part = "Part I",
    description = "Financial assistance and certain other community benefits at cost"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Financial assistance policy
    #[field(xpath = "/IRS990ScheduleH/FinancialAssistancePolicyInd", line = "Part I Line 1a", max_length = 5)]
    pub financial_assistance_policy_ind: Option<String>,

    /// Written policy
    #[field(xpath = "/IRS990ScheduleH/WrittenPolicyInd", line = "Part I Line 1b", max_length = 5)]
    pub written_policy_ind: Option<String>,

    /// Annual community benefit report prepared
    #[field(xpath = "/IRS990ScheduleH/AnnualCommunityBnftReportInd", line = "Part I Line 6a", max_length = 5)]
    pub annual_community_bnft_report_ind: Option<String>,

    /// Financial assistance at cost - net community benefit expense
    #[field(xpath = "/IRS990ScheduleH/FinancialAssistanceAtCostTyp/NetCommunityBenefitExpnsAmt", line = "Part I Line 7a Column e")]
    pub financial_assistance_net_expense_amt: Option<i64>,

    /// Financial assistance at cost - percent of total expense
    #[field(xpath = "/IRS990ScheduleH/FinancialAssistanceAtCostTyp/TotalExpensePct", line = "Part I Line 7a Column f")]
    pub financial_assistance_expense_pct: Option<f64>,

    /// Total community benefits - net community benefit expense
    #[field(xpath = "/IRS990ScheduleH/TotalCommunityBenefitsGrp/NetCommunityBenefitExpnsAmt", line = "Part I Line 7k Column e")]
    pub total_community_benefits_net_expense_amt: Option<i64>,

    /// Total community benefits - percent of total expense
    #[field(xpath = "/IRS990ScheduleH/TotalCommunityBenefitsGrp/TotalExpensePct", line = "Part I Line 7k Column f")]
    pub total_community_benefits_expense_pct: Option<f64>,

    /// Number of licensed hospital facilities
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesCnt", line = "Part V Section A")]
    pub hospital_facilities_cnt: Option<i32>,

    /// Policy applies to all hospital facilities
    #[field(xpath = "/IRS990ScheduleH/AllHospitalsInd", line = "Part I Line 2", max_length = 5)]
    pub all_hospitals_ind: Option<String>,

    /// Policy applies to each hospital facility individually
    #[field(xpath = "/IRS990ScheduleH/IndividualHospitalsInd", line = "Part I Line 2", max_length = 5)]
    pub individual_hospitals_ind: Option<String>,

    /// Policy generally tailored to individual hospital facilities
    #[field(xpath = "/IRS990ScheduleH/GenerallyTailoredInd", line = "Part I Line 2", max_length = 5)]
    pub generally_tailored_ind: Option<String>,

    /// Federal poverty guidelines used to determine free care
    #[field(xpath = "/IRS990ScheduleH/FPGReferenceFreeCareInd", line = "Part I Line 3a", max_length = 5)]
    pub fpg_reference_free_care_ind: Option<String>,

    /// Free care threshold: 100% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG100Ind", line = "Part I Line 3a", max_length = 5)]
    pub fpg_100_ind: Option<String>,

    /// Free care threshold: 150% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG150Ind", line = "Part I Line 3a", max_length = 5)]
    pub fpg_150_ind: Option<String>,

    /// Free care threshold: 200% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG200Ind", line = "Part I Line 3a", max_length = 5)]
    pub fpg_200_ind: Option<String>,

    /// Free care threshold: other percentage
    #[field(xpath = "/IRS990ScheduleH/FreeCareOtherPct", line = "Part I Line 3a")]
    pub free_care_other_pct: Option<f64>,

    /// Federal poverty guidelines used to determine discounted care
    #[field(
        xpath = "/IRS990ScheduleH/FPGReferenceDiscountedCareInd",
        line = "Part I Line 3b",
        max_length = 5
    )]
    pub fpg_reference_discounted_care_ind: Option<String>,

    /// Discounted care threshold: 200% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG200DInd", line = "Part I Line 3b", max_length = 5)]
    pub fpg_200_d_ind: Option<String>,

    /// Discounted care threshold: 250% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG250DInd", line = "Part I Line 3b", max_length = 5)]
    pub fpg_250_d_ind: Option<String>,

    /// Discounted care threshold: 300% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG300DInd", line = "Part I Line 3b", max_length = 5)]
    pub fpg_300_d_ind: Option<String>,

    /// Discounted care threshold: 350% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG350DInd", line = "Part I Line 3b", max_length = 5)]
    pub fpg_350_d_ind: Option<String>,

    /// Discounted care threshold: 400% of FPG
    #[field(xpath = "/IRS990ScheduleH/FPG400DInd", line = "Part I Line 3b", max_length = 5)]
    pub fpg_400_d_ind: Option<String>,

    /// Discounted care threshold: other percentage
    #[field(xpath = "/IRS990ScheduleH/DiscountedCareOtherPct", line = "Part I Line 3b")]
    pub discounted_care_other_pct: Option<f64>,

    /// Policy provides free or discounted care to the medically indigent
    #[field(xpath = "/IRS990ScheduleH/FreeCareMedicallyIndigentInd", line = "Part I Line 4", max_length = 5)]
    pub free_care_medically_indigent_ind: Option<String>,

    /// Budgeted amounts for free or discounted care
    #[field(xpath = "/IRS990ScheduleH/FinancialAssistanceBudgetInd", line = "Part I Line 5a", max_length = 5)]
    pub financial_assistance_budget_ind: Option<String>,

    /// Free or discounted care expenses exceeded the budget
    #[field(xpath = "/IRS990ScheduleH/ExceededBudgetedAmountInd", line = "Part I Line 5b", max_length = 5)]
    pub exceeded_budgeted_amount_ind: Option<String>,

    /// Unable to provide free or discounted care to eligible patients
    #[field(xpath = "/IRS990ScheduleH/UnableToProvideCareInd", line = "Part I Line 5c", max_length = 5)]
    pub unable_to_provide_care_ind: Option<String>,

    /// Community benefit report made available to the public
    #[field(xpath = "/IRS990ScheduleH/ReportPublicallyAvailableInd", line = "Part I Line 6b", max_length = 5)]
    pub report_publically_available_ind: Option<String>,

    /// Financial assistance at cost - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/FinancialAssistanceAtCostTyp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7a Column a"
    )]
    pub financial_assistance_activities_or_programs_cnt: Option<i32>,

    /// Financial assistance at cost - persons served
    #[field(
        xpath = "/IRS990ScheduleH/FinancialAssistanceAtCostTyp/PersonsServedCnt",
        line = "Part I Line 7a Column b"
    )]
    pub financial_assistance_persons_served_cnt: Option<i32>,

    /// Financial assistance at cost - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/FinancialAssistanceAtCostTyp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7a Column c"
    )]
    pub financial_assistance_total_community_benefit_expns_amt: Option<i64>,

    /// Financial assistance at cost - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/FinancialAssistanceAtCostTyp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7a Column d"
    )]
    pub financial_assistance_direct_offsetting_revenue_amt: Option<i64>,

    /// Medicaid - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedMedicaidGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7b Column a"
    )]
    pub unreimbursed_medicaid_activities_or_programs_cnt: Option<i32>,

    /// Medicaid - persons served
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedMedicaidGrp/PersonsServedCnt",
        line = "Part I Line 7b Column b"
    )]
    pub unreimbursed_medicaid_persons_served_cnt: Option<i32>,

    /// Medicaid - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedMedicaidGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7b Column c"
    )]
    pub unreimbursed_medicaid_total_community_benefit_expns_amt: Option<i64>,

    /// Medicaid - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedMedicaidGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7b Column d"
    )]
    pub unreimbursed_medicaid_direct_offsetting_revenue_amt: Option<i64>,

    /// Medicaid - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedMedicaidGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7b Column e"
    )]
    pub unreimbursed_medicaid_net_community_benefit_expns_amt: Option<i64>,

    /// Medicaid - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedMedicaidGrp/TotalExpensePct",
        line = "Part I Line 7b Column f"
    )]
    pub unreimbursed_medicaid_total_expense_pct: Option<f64>,

    /// Costs of other means-tested government programs - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedCostsGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7c Column a"
    )]
    pub unreimbursed_costs_activities_or_programs_cnt: Option<i32>,

    /// Costs of other means-tested government programs - persons served
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedCostsGrp/PersonsServedCnt",
        line = "Part I Line 7c Column b"
    )]
    pub unreimbursed_costs_persons_served_cnt: Option<i32>,

    /// Costs of other means-tested government programs - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedCostsGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7c Column c"
    )]
    pub unreimbursed_costs_total_community_benefit_expns_amt: Option<i64>,

    /// Costs of other means-tested government programs - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedCostsGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7c Column d"
    )]
    pub unreimbursed_costs_direct_offsetting_revenue_amt: Option<i64>,

    /// Costs of other means-tested government programs - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedCostsGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7c Column e"
    )]
    pub unreimbursed_costs_net_community_benefit_expns_amt: Option<i64>,

    /// Costs of other means-tested government programs - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/UnreimbursedCostsGrp/TotalExpensePct",
        line = "Part I Line 7c Column f"
    )]
    pub unreimbursed_costs_total_expense_pct: Option<f64>,

    /// Total financial assistance and means-tested programs - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/TotalFinancialAssistanceTyp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7d Column a"
    )]
    pub total_financial_assistance_activities_or_programs_cnt: Option<i32>,

    /// Total financial assistance and means-tested programs - persons served
    #[field(
        xpath = "/IRS990ScheduleH/TotalFinancialAssistanceTyp/PersonsServedCnt",
        line = "Part I Line 7d Column b"
    )]
    pub total_financial_assistance_persons_served_cnt: Option<i32>,

    /// Total financial assistance and means-tested programs - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalFinancialAssistanceTyp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7d Column c"
    )]
    pub total_financial_assistance_total_community_benefit_expns_amt: Option<i64>,

    /// Total financial assistance and means-tested programs - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/TotalFinancialAssistanceTyp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7d Column d"
    )]
    pub total_financial_assistance_direct_offsetting_revenue_amt: Option<i64>,

    /// Total financial assistance and means-tested programs - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalFinancialAssistanceTyp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7d Column e"
    )]
    pub total_financial_assistance_net_community_benefit_expns_amt: Option<i64>,

    /// Total financial assistance and means-tested programs - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalFinancialAssistanceTyp/TotalExpensePct",
        line = "Part I Line 7d Column f"
    )]
    pub total_financial_assistance_total_expense_pct: Option<f64>,

    /// Community health improvement services - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/CommunityHealthServicesGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7e Column a"
    )]
    pub community_health_services_activities_or_programs_cnt: Option<i32>,

    /// Community health improvement services - persons served
    #[field(
        xpath = "/IRS990ScheduleH/CommunityHealthServicesGrp/PersonsServedCnt",
        line = "Part I Line 7e Column b"
    )]
    pub community_health_services_persons_served_cnt: Option<i32>,

    /// Community health improvement services - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CommunityHealthServicesGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7e Column c"
    )]
    pub community_health_services_total_community_benefit_expns_amt: Option<i64>,

    /// Community health improvement services - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/CommunityHealthServicesGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7e Column d"
    )]
    pub community_health_services_direct_offsetting_revenue_amt: Option<i64>,

    /// Community health improvement services - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CommunityHealthServicesGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7e Column e"
    )]
    pub community_health_services_net_community_benefit_expns_amt: Option<i64>,

    /// Community health improvement services - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/CommunityHealthServicesGrp/TotalExpensePct",
        line = "Part I Line 7e Column f"
    )]
    pub community_health_services_total_expense_pct: Option<f64>,

    /// Health professions education - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/HealthProfessionsEducationGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7f Column a"
    )]
    pub health_professions_education_activities_or_programs_cnt: Option<i32>,

    /// Health professions education - persons served
    #[field(
        xpath = "/IRS990ScheduleH/HealthProfessionsEducationGrp/PersonsServedCnt",
        line = "Part I Line 7f Column b"
    )]
    pub health_professions_education_persons_served_cnt: Option<i32>,

    /// Health professions education - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/HealthProfessionsEducationGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7f Column c"
    )]
    pub health_professions_education_total_community_benefit_expns_amt: Option<i64>,

    /// Health professions education - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/HealthProfessionsEducationGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7f Column d"
    )]
    pub health_professions_education_direct_offsetting_revenue_amt: Option<i64>,

    /// Health professions education - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/HealthProfessionsEducationGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7f Column e"
    )]
    pub health_professions_education_net_community_benefit_expns_amt: Option<i64>,

    /// Health professions education - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/HealthProfessionsEducationGrp/TotalExpensePct",
        line = "Part I Line 7f Column f"
    )]
    pub health_professions_education_total_expense_pct: Option<f64>,

    /// Subsidized health services - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/SubsidizedHealthServicesGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7g Column a"
    )]
    pub subsidized_health_services_activities_or_programs_cnt: Option<i32>,

    /// Subsidized health services - persons served
    #[field(
        xpath = "/IRS990ScheduleH/SubsidizedHealthServicesGrp/PersonsServedCnt",
        line = "Part I Line 7g Column b"
    )]
    pub subsidized_health_services_persons_served_cnt: Option<i32>,

    /// Subsidized health services - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/SubsidizedHealthServicesGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7g Column c"
    )]
    pub subsidized_health_services_total_community_benefit_expns_amt: Option<i64>,

    /// Subsidized health services - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/SubsidizedHealthServicesGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7g Column d"
    )]
    pub subsidized_health_services_direct_offsetting_revenue_amt: Option<i64>,

    /// Subsidized health services - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/SubsidizedHealthServicesGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7g Column e"
    )]
    pub subsidized_health_services_net_community_benefit_expns_amt: Option<i64>,

    /// Subsidized health services - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/SubsidizedHealthServicesGrp/TotalExpensePct",
        line = "Part I Line 7g Column f"
    )]
    pub subsidized_health_services_total_expense_pct: Option<f64>,

    /// Research - number of activities or programs
    #[field(xpath = "/IRS990ScheduleH/ResearchGrp/ActivitiesOrProgramsCnt", line = "Part I Line 7h Column a")]
    pub research_activities_or_programs_cnt: Option<i32>,

    /// Research - persons served
    #[field(xpath = "/IRS990ScheduleH/ResearchGrp/PersonsServedCnt", line = "Part I Line 7h Column b")]
    pub research_persons_served_cnt: Option<i32>,

    /// Research - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/ResearchGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7h Column c"
    )]
    pub research_total_community_benefit_expns_amt: Option<i64>,

    /// Research - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/ResearchGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7h Column d"
    )]
    pub research_direct_offsetting_revenue_amt: Option<i64>,

    /// Research - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/ResearchGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7h Column e"
    )]
    pub research_net_community_benefit_expns_amt: Option<i64>,

    /// Research - percent of total expense
    #[field(xpath = "/IRS990ScheduleH/ResearchGrp/TotalExpensePct", line = "Part I Line 7h Column f")]
    pub research_total_expense_pct: Option<f64>,

    /// Cash and in-kind contributions for community benefit - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/CashAndInKindContributionsGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7i Column a"
    )]
    pub cash_and_in_kind_contributions_activities_or_programs_cnt: Option<i32>,

    /// Cash and in-kind contributions for community benefit - persons served
    #[field(
        xpath = "/IRS990ScheduleH/CashAndInKindContributionsGrp/PersonsServedCnt",
        line = "Part I Line 7i Column b"
    )]
    pub cash_and_in_kind_contributions_persons_served_cnt: Option<i32>,

    /// Cash and in-kind contributions for community benefit - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CashAndInKindContributionsGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7i Column c"
    )]
    pub cash_and_in_kind_contributions_total_community_benefit_expns_amt: Option<i64>,

    /// Cash and in-kind contributions for community benefit - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/CashAndInKindContributionsGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7i Column d"
    )]
    pub cash_and_in_kind_contributions_direct_offsetting_revenue_amt: Option<i64>,

    /// Cash and in-kind contributions for community benefit - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CashAndInKindContributionsGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7i Column e"
    )]
    pub cash_and_in_kind_contributions_net_community_benefit_expns_amt: Option<i64>,

    /// Cash and in-kind contributions for community benefit - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/CashAndInKindContributionsGrp/TotalExpensePct",
        line = "Part I Line 7i Column f"
    )]
    pub cash_and_in_kind_contributions_total_expense_pct: Option<f64>,

    /// Total other benefits - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/TotalOtherBenefitsGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7j Column a"
    )]
    pub total_other_benefits_activities_or_programs_cnt: Option<i32>,

    /// Total other benefits - persons served
    #[field(
        xpath = "/IRS990ScheduleH/TotalOtherBenefitsGrp/PersonsServedCnt",
        line = "Part I Line 7j Column b"
    )]
    pub total_other_benefits_persons_served_cnt: Option<i32>,

    /// Total other benefits - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalOtherBenefitsGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7j Column c"
    )]
    pub total_other_benefits_total_community_benefit_expns_amt: Option<i64>,

    /// Total other benefits - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/TotalOtherBenefitsGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7j Column d"
    )]
    pub total_other_benefits_direct_offsetting_revenue_amt: Option<i64>,

    /// Total other benefits - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalOtherBenefitsGrp/NetCommunityBenefitExpnsAmt",
        line = "Part I Line 7j Column e"
    )]
    pub total_other_benefits_net_community_benefit_expns_amt: Option<i64>,

    /// Total other benefits - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalOtherBenefitsGrp/TotalExpensePct",
        line = "Part I Line 7j Column f"
    )]
    pub total_other_benefits_total_expense_pct: Option<f64>,

    /// Total community benefits - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommunityBenefitsGrp/ActivitiesOrProgramsCnt",
        line = "Part I Line 7k Column a"
    )]
    pub total_community_benefits_activities_or_programs_cnt: Option<i32>,

    /// Total community benefits - persons served
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommunityBenefitsGrp/PersonsServedCnt",
        line = "Part I Line 7k Column b"
    )]
    pub total_community_benefits_persons_served_cnt: Option<i32>,

    /// Total community benefits - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommunityBenefitsGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part I Line 7k Column c"
    )]
    pub total_community_benefits_total_community_benefit_expns_amt: Option<i64>,

    /// Total community benefits - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommunityBenefitsGrp/DirectOffsettingRevenueAmt",
        line = "Part I Line 7k Column d"
    )]
    pub total_community_benefits_direct_offsetting_revenue_amt: Option<i64>,

    /// Number of other health care facilities
    #[field(xpath = "/IRS990ScheduleH/OtherHealthCareFacilitiesCnt", line = "Part V Section D")]
    pub other_health_care_facilities_cnt: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_part_ii",
    form = "ScheduleH",
    part = "Part II",
    description = "Community building activities"
)]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Physical improvements and housing - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/PhysicalImprovementsHousingGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 1 Column a"
    )]
    pub physical_improvements_housing_activities_or_programs_cnt: Option<i32>,

    /// Physical improvements and housing - persons served
    #[field(
        xpath = "/IRS990ScheduleH/PhysicalImprovementsHousingGrp/PersonsServedCnt",
        line = "Part II Line 1 Column b"
    )]
    pub physical_improvements_housing_persons_served_cnt: Option<i32>,

    /// Physical improvements and housing - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/PhysicalImprovementsHousingGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 1 Column c"
    )]
    pub physical_improvements_housing_total_community_benefit_expns_amt: Option<i64>,

    /// Physical improvements and housing - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/PhysicalImprovementsHousingGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 1 Column d"
    )]
    pub physical_improvements_housing_direct_offsetting_revenue_amt: Option<i64>,

    /// Physical improvements and housing - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/PhysicalImprovementsHousingGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 1 Column e"
    )]
    pub physical_improvements_housing_net_community_benefit_expns_amt: Option<i64>,

    /// Physical improvements and housing - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/PhysicalImprovementsHousingGrp/TotalExpensePct",
        line = "Part II Line 1 Column f"
    )]
    pub physical_improvements_housing_total_expense_pct: Option<f64>,

    /// Economic development - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/EconomicDevelopmentGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 2 Column a"
    )]
    pub economic_development_activities_or_programs_cnt: Option<i32>,

    /// Economic development - persons served
    #[field(
        xpath = "/IRS990ScheduleH/EconomicDevelopmentGrp/PersonsServedCnt",
        line = "Part II Line 2 Column b"
    )]
    pub economic_development_persons_served_cnt: Option<i32>,

    /// Economic development - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/EconomicDevelopmentGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 2 Column c"
    )]
    pub economic_development_total_community_benefit_expns_amt: Option<i64>,

    /// Economic development - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/EconomicDevelopmentGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 2 Column d"
    )]
    pub economic_development_direct_offsetting_revenue_amt: Option<i64>,

    /// Economic development - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/EconomicDevelopmentGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 2 Column e"
    )]
    pub economic_development_net_community_benefit_expns_amt: Option<i64>,

    /// Economic development - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/EconomicDevelopmentGrp/TotalExpensePct",
        line = "Part II Line 2 Column f"
    )]
    pub economic_development_total_expense_pct: Option<f64>,

    /// Community support - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/CommunitySupportGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 3 Column a"
    )]
    pub community_support_activities_or_programs_cnt: Option<i32>,

    /// Community support - persons served
    #[field(
        xpath = "/IRS990ScheduleH/CommunitySupportGrp/PersonsServedCnt",
        line = "Part II Line 3 Column b"
    )]
    pub community_support_persons_served_cnt: Option<i32>,

    /// Community support - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CommunitySupportGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 3 Column c"
    )]
    pub community_support_total_community_benefit_expns_amt: Option<i64>,

    /// Community support - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/CommunitySupportGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 3 Column d"
    )]
    pub community_support_direct_offsetting_revenue_amt: Option<i64>,

    /// Community support - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CommunitySupportGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 3 Column e"
    )]
    pub community_support_net_community_benefit_expns_amt: Option<i64>,

    /// Community support - percent of total expense
    #[field(xpath = "/IRS990ScheduleH/CommunitySupportGrp/TotalExpensePct", line = "Part II Line 3 Column f")]
    pub community_support_total_expense_pct: Option<f64>,

    /// Environmental improvements - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/EnvironmentalImprovementsGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 4 Column a"
    )]
    pub environmental_improvements_activities_or_programs_cnt: Option<i32>,

    /// Environmental improvements - persons served
    #[field(
        xpath = "/IRS990ScheduleH/EnvironmentalImprovementsGrp/PersonsServedCnt",
        line = "Part II Line 4 Column b"
    )]
    pub environmental_improvements_persons_served_cnt: Option<i32>,

    /// Environmental improvements - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/EnvironmentalImprovementsGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 4 Column c"
    )]
    pub environmental_improvements_total_community_benefit_expns_amt: Option<i64>,

    /// Environmental improvements - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/EnvironmentalImprovementsGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 4 Column d"
    )]
    pub environmental_improvements_direct_offsetting_revenue_amt: Option<i64>,

    /// Environmental improvements - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/EnvironmentalImprovementsGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 4 Column e"
    )]
    pub environmental_improvements_net_community_benefit_expns_amt: Option<i64>,

    /// Environmental improvements - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/EnvironmentalImprovementsGrp/TotalExpensePct",
        line = "Part II Line 4 Column f"
    )]
    pub environmental_improvements_total_expense_pct: Option<f64>,

    /// Leadership development and training for community members - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/LeadershipDevelopmentGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 5 Column a"
    )]
    pub leadership_development_activities_or_programs_cnt: Option<i32>,

    /// Leadership development and training for community members - persons served
    #[field(
        xpath = "/IRS990ScheduleH/LeadershipDevelopmentGrp/PersonsServedCnt",
        line = "Part II Line 5 Column b"
    )]
    pub leadership_development_persons_served_cnt: Option<i32>,

    /// Leadership development and training for community members - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/LeadershipDevelopmentGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 5 Column c"
    )]
    pub leadership_development_total_community_benefit_expns_amt: Option<i64>,

    /// Leadership development and training for community members - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/LeadershipDevelopmentGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 5 Column d"
    )]
    pub leadership_development_direct_offsetting_revenue_amt: Option<i64>,

    /// Leadership development and training for community members - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/LeadershipDevelopmentGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 5 Column e"
    )]
    pub leadership_development_net_community_benefit_expns_amt: Option<i64>,

    /// Leadership development and training for community members - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/LeadershipDevelopmentGrp/TotalExpensePct",
        line = "Part II Line 5 Column f"
    )]
    pub leadership_development_total_expense_pct: Option<f64>,

    /// Coalition building - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/CoalitionBuildingGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 6 Column a"
    )]
    pub coalition_building_activities_or_programs_cnt: Option<i32>,

    /// Coalition building - persons served
    #[field(
        xpath = "/IRS990ScheduleH/CoalitionBuildingGrp/PersonsServedCnt",
        line = "Part II Line 6 Column b"
    )]
    pub coalition_building_persons_served_cnt: Option<i32>,

    /// Coalition building - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CoalitionBuildingGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 6 Column c"
    )]
    pub coalition_building_total_community_benefit_expns_amt: Option<i64>,

    /// Coalition building - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/CoalitionBuildingGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 6 Column d"
    )]
    pub coalition_building_direct_offsetting_revenue_amt: Option<i64>,

    /// Coalition building - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/CoalitionBuildingGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 6 Column e"
    )]
    pub coalition_building_net_community_benefit_expns_amt: Option<i64>,

    /// Coalition building - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/CoalitionBuildingGrp/TotalExpensePct",
        line = "Part II Line 6 Column f"
    )]
    pub coalition_building_total_expense_pct: Option<f64>,

    /// Community health improvement advocacy - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/HealthImprovementAdvocacyGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 7 Column a"
    )]
    pub health_improvement_advocacy_activities_or_programs_cnt: Option<i32>,

    /// Community health improvement advocacy - persons served
    #[field(
        xpath = "/IRS990ScheduleH/HealthImprovementAdvocacyGrp/PersonsServedCnt",
        line = "Part II Line 7 Column b"
    )]
    pub health_improvement_advocacy_persons_served_cnt: Option<i32>,

    /// Community health improvement advocacy - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/HealthImprovementAdvocacyGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 7 Column c"
    )]
    pub health_improvement_advocacy_total_community_benefit_expns_amt: Option<i64>,

    /// Community health improvement advocacy - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/HealthImprovementAdvocacyGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 7 Column d"
    )]
    pub health_improvement_advocacy_direct_offsetting_revenue_amt: Option<i64>,

    /// Community health improvement advocacy - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/HealthImprovementAdvocacyGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 7 Column e"
    )]
    pub health_improvement_advocacy_net_community_benefit_expns_amt: Option<i64>,

    /// Community health improvement advocacy - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/HealthImprovementAdvocacyGrp/TotalExpensePct",
        line = "Part II Line 7 Column f"
    )]
    pub health_improvement_advocacy_total_expense_pct: Option<f64>,

    /// Workforce development - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/WorkforceDevelopmentGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 8 Column a"
    )]
    pub workforce_development_activities_or_programs_cnt: Option<i32>,

    /// Workforce development - persons served
    #[field(
        xpath = "/IRS990ScheduleH/WorkforceDevelopmentGrp/PersonsServedCnt",
        line = "Part II Line 8 Column b"
    )]
    pub workforce_development_persons_served_cnt: Option<i32>,

    /// Workforce development - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/WorkforceDevelopmentGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 8 Column c"
    )]
    pub workforce_development_total_community_benefit_expns_amt: Option<i64>,

    /// Workforce development - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/WorkforceDevelopmentGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 8 Column d"
    )]
    pub workforce_development_direct_offsetting_revenue_amt: Option<i64>,

    /// Workforce development - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/WorkforceDevelopmentGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 8 Column e"
    )]
    pub workforce_development_net_community_benefit_expns_amt: Option<i64>,

    /// Workforce development - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/WorkforceDevelopmentGrp/TotalExpensePct",
        line = "Part II Line 8 Column f"
    )]
    pub workforce_development_total_expense_pct: Option<f64>,

    /// Other - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/OtherCommuntityBuildingActyGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 9 Column a"
    )]
    pub other_communtity_building_acty_activities_or_programs_cnt: Option<i32>,

    /// Other - persons served
    #[field(
        xpath = "/IRS990ScheduleH/OtherCommuntityBuildingActyGrp/PersonsServedCnt",
        line = "Part II Line 9 Column b"
    )]
    pub other_communtity_building_acty_persons_served_cnt: Option<i32>,

    /// Other - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/OtherCommuntityBuildingActyGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 9 Column c"
    )]
    pub other_communtity_building_acty_total_community_benefit_expns_amt: Option<i64>,

    /// Other - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/OtherCommuntityBuildingActyGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 9 Column d"
    )]
    pub other_communtity_building_acty_direct_offsetting_revenue_amt: Option<i64>,

    /// Other - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/OtherCommuntityBuildingActyGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 9 Column e"
    )]
    pub other_communtity_building_acty_net_community_benefit_expns_amt: Option<i64>,

    /// Other - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/OtherCommuntityBuildingActyGrp/TotalExpensePct",
        line = "Part II Line 9 Column f"
    )]
    pub other_communtity_building_acty_total_expense_pct: Option<f64>,

    /// Total - number of activities or programs
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommuntityBuildingActyGrp/ActivitiesOrProgramsCnt",
        line = "Part II Line 10 Column a"
    )]
    pub total_communtity_building_acty_activities_or_programs_cnt: Option<i32>,

    /// Total - persons served
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommuntityBuildingActyGrp/PersonsServedCnt",
        line = "Part II Line 10 Column b"
    )]
    pub total_communtity_building_acty_persons_served_cnt: Option<i32>,

    /// Total - total community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommuntityBuildingActyGrp/TotalCommunityBenefitExpnsAmt",
        line = "Part II Line 10 Column c"
    )]
    pub total_communtity_building_acty_total_community_benefit_expns_amt: Option<i64>,

    /// Total - direct offsetting revenue
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommuntityBuildingActyGrp/DirectOffsettingRevenueAmt",
        line = "Part II Line 10 Column d"
    )]
    pub total_communtity_building_acty_direct_offsetting_revenue_amt: Option<i64>,

    /// Total - net community benefit expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommuntityBuildingActyGrp/NetCommunityBenefitExpnsAmt",
        line = "Part II Line 10 Column e"
    )]
    pub total_communtity_building_acty_net_community_benefit_expns_amt: Option<i64>,

    /// Total - percent of total expense
    #[field(
        xpath = "/IRS990ScheduleH/TotalCommuntityBuildingActyGrp/TotalExpensePct",
        line = "Part II Line 10 Column f"
    )]
    pub total_communtity_building_acty_total_expense_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_part_iii",
    form = "ScheduleH",
    part = "Part III",
    description = "Bad debt, Medicare and collection practices"
)]
pub struct PartIII {
    pub object_id: String,
    pub ein: String,

    /// Bad debt expense reported under Healthcare Financial Management Statement No. 15
    #[field(xpath = "/IRS990ScheduleH/BadDebtExpenseReportedInd", line = "Part III Line 1", max_length = 5)]
    pub bad_debt_expense_reported_ind: Option<String>,

    /// Bad debt expense at cost
    #[field(xpath = "/IRS990ScheduleH/BadDebtExpenseAmt", line = "Part III Line 2")]
    pub bad_debt_expense_amt: Option<i64>,

    /// Bad debt attributable to patients eligible for financial assistance
    #[field(xpath = "/IRS990ScheduleH/BadDebtExpenseAttributableAmt", line = "Part III Line 3")]
    pub bad_debt_expense_attributable_amt: Option<i64>,

    /// Total revenue received from Medicare
    #[field(xpath = "/IRS990ScheduleH/ReimbursedByMedicareAmt", line = "Part III Line 5")]
    pub reimbursed_by_medicare_amt: Option<i64>,

    /// Medicare allowable costs of care
    #[field(xpath = "/IRS990ScheduleH/CostOfCareReimbursedByMedcrAmt", line = "Part III Line 6")]
    pub cost_of_care_reimbursed_by_medcr_amt: Option<i64>,

    /// Medicare surplus or shortfall
    #[field(xpath = "/IRS990ScheduleH/MedicareSurplusOrShortfallAmt", line = "Part III Line 7")]
    pub medicare_surplus_or_shortfall_amt: Option<i64>,

    /// Cost accounting system used to determine line 6
    #[field(xpath = "/IRS990ScheduleH/CostAccountingSystemInd", line = "Part III Line 8", max_length = 5)]
    pub cost_accounting_system_ind: Option<String>,

    /// Cost to charge ratio used to determine line 6
    #[field(xpath = "/IRS990ScheduleH/CostToChargeRatioInd", line = "Part III Line 8", max_length = 5)]
    pub cost_to_charge_ratio_ind: Option<String>,

    /// Other method used to determine line 6
    #[field(xpath = "/IRS990ScheduleH/OtherInd", line = "Part III Line 8", max_length = 5)]
    pub other_ind: Option<String>,

    /// Written debt collection policy
    #[field(
        xpath = "/IRS990ScheduleH/WrittenDebtCollectionPolicyInd",
        line = "Part III Line 9a",
        max_length = 5
    )]
    pub written_debt_collection_policy_ind: Option<String>,

    /// Collection policy contains provisions for patients eligible for assistance
    #[field(
        xpath = "/IRS990ScheduleH/FinancialAssistancePrvsnInd",
        line = "Part III Line 9b",
        max_length = 5
    )]
    pub financial_assistance_prvsn_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_mngmntcandjntvntrs",
    form = "ScheduleH",
    part = "Part IV",
    description = "Management companies and joint ventures",
    group = "/IRS990ScheduleH/ManagementCoAndJointVenturesGrp",
    parent = "return_skedh_part_i"
)]
pub struct ManagementCoAndJointVentures {
    pub object_id: String,
    pub ein: String,

    /// Name of entity
    #[field(
        xpath = "/IRS990ScheduleH/ManagementCoAndJointVenturesGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part IV Column a"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Description of primary activity
    #[field(
        xpath = "/IRS990ScheduleH/ManagementCoAndJointVenturesGrp/PrimaryActivitiesTxt",
        line = "Part IV Column b",
        long
    )]
    pub primary_activities_txt: Option<String>,

    /// Organization's profit percentage or stock ownership
    #[field(
        xpath = "/IRS990ScheduleH/ManagementCoAndJointVenturesGrp/OrgProfitOrOwnershipPct",
        line = "Part IV Column c"
    )]
    pub org_profit_or_ownership_pct: Option<f64>,

    /// Officers, directors, trustees or key employees' profit or ownership
    #[field(
        xpath = "/IRS990ScheduleH/ManagementCoAndJointVenturesGrp/OfficersEtcProfitOrOwnershipPct",
        line = "Part IV Column d"
    )]
    pub officers_etc_profit_or_ownership_pct: Option<f64>,

    /// Physicians' profit percentage or stock ownership
    #[field(
        xpath = "/IRS990ScheduleH/ManagementCoAndJointVenturesGrp/PhysiciansProfitOrOwnershipPct",
        line = "Part IV Column e"
    )]
    pub physicians_profit_or_ownership_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_hsptlfclts",
    form = "ScheduleH",
    part = "Part V Section A",
    description = "Hospital facilities",
    group = "/IRS990ScheduleH/HospitalFacilitiesGrp",
    parent = "return_skedh_part_i"
)]
pub struct HospitalFacilities {
    pub object_id: String,
    pub ein: String,

    /// Facility reporting group
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/FacilityNum", line = "Part V Section A")]
    pub facility_num: Option<i32>,

    /// Name of hospital facility
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/BusinessName/BusinessNameLine1Txt", line = "Part V Section A")]
    pub business_name_line1_txt: Option<String>,

    /// Facility city
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/USAddress/CityNm", line = "Part V Section A", max_length = 22)]
    pub city_nm: Option<String>,

    /// Facility state
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/USAddress/StateAbbreviationCd", line = "Part V Section A", max_length = 2)]
    pub state_abbreviation_cd: Option<String>,

    /// State license number
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/StateLicenseNum", line = "Part V Section A")]
    pub state_license_num: Option<String>,

    /// Licensed hospital
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/LicensedHospitalInd", line = "Part V Section A", max_length = 5)]
    pub licensed_hospital_ind: Option<String>,

    /// General medical and surgical
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/GeneralMedicalAndSurgicalInd", line = "Part V Section A", max_length = 5)]
    pub general_medical_and_surgical_ind: Option<String>,

    /// Emergency room open 24 hours
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/EmergencyRoom24HrsInd", line = "Part V Section A", max_length = 5)]
    pub emergency_room_24hrs_ind: Option<String>,

    /// Name of hospital facility, continued
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/BusinessName/BusinessNameLine2Txt",
        line = "Part V Section A"
    )]
    pub business_name_line_2_txt: Option<String>,

    /// Facility street address
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/USAddress/AddressLine1Txt",
        line = "Part V Section A"
    )]
    pub address_line_1_txt: Option<String>,

    /// Facility ZIP code
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/USAddress/ZIPCd",
        line = "Part V Section A",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Facility website
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/WebsiteAddressTxt", line = "Part V Section A")]
    pub website_address_txt: Option<String>,

    /// Children's hospital
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/ChildrensHospitalInd",
        line = "Part V Section A",
        max_length = 5
    )]
    pub childrens_hospital_ind: Option<String>,

    /// Teaching hospital
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/TeachingHospitalInd",
        line = "Part V Section A",
        max_length = 5
    )]
    pub teaching_hospital_ind: Option<String>,

    /// Critical access hospital
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/CriticalAccessHospitalInd",
        line = "Part V Section A",
        max_length = 5
    )]
    pub critical_access_hospital_ind: Option<String>,

    /// Research facility
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/ResearchFacilityInd",
        line = "Part V Section A",
        max_length = 5
    )]
    pub research_facility_ind: Option<String>,

    /// Other facility type
    #[field(xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/OtherDesc", line = "Part V Section A", long)]
    pub other_desc: Option<String>,

    /// Facility reporting group
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFacilitiesGrp/FacilityReportingGroupTxt",
        line = "Part V Section A",
        max_length = 2
    )]
    pub facility_reporting_group_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_hsptlfcltyplcsprctc",
    form = "ScheduleH",
    part = "Part V Section B",
    description = "Facility information: policies and practices",
    group = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp",
    parent = "return_skedh_part_i"
)]
pub struct HospitalFcltyPoliciesPrctc {
    pub object_id: String,
    pub ein: String,

    /// Facility reporting group
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/FacilityReportingGroupTxt",
        max_length = 2
    )]
    pub facility_reporting_group_txt: Option<String>,

    /// Facility line number
    #[field(xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/FacilityNum")]
    pub facility_num: Option<String>,

    /// Name of hospital facility or group
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/HospitalFacilityName/BusinessNameLine1Txt"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// First licensed, registered or recognized in the current or prior tax year
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/FirstLicensedCYOrPYInd",
        line = "Part V Section B Line 1",
        max_length = 5
    )]
    pub first_licensed_cy_or_py_ind: Option<String>,

    /// Became a tax-exempt hospital in the current or prior tax year
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/TaxExemptHospitalCYOrPYInd",
        line = "Part V Section B Line 2",
        max_length = 5
    )]
    pub tax_exempt_hospital_cy_or_py_ind: Option<String>,

    /// Community health needs assessment conducted in the current or two prior years
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/CHNAConductedInd",
        line = "Part V Section B Line 3",
        max_length = 5
    )]
    pub chna_conducted_ind: Option<String>,

    /// CHNA describes the community served
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/DefinitionOfCommunityServedInd",
        line = "Part V Section B Line 3a",
        max_length = 5
    )]
    pub definition_of_community_served_ind: Option<String>,

    /// CHNA describes demographics of the community
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/CommunityDemographicsInd",
        line = "Part V Section B Line 3b",
        max_length = 5
    )]
    pub community_demographics_ind: Option<String>,

    /// CHNA describes existing health care facilities and resources
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ExistingResourcesInd",
        line = "Part V Section B Line 3c",
        max_length = 5
    )]
    pub existing_resources_ind: Option<String>,

    /// CHNA describes how data was obtained
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/HowDataObtainedInd",
        line = "Part V Section B Line 3d",
        max_length = 5
    )]
    pub how_data_obtained_ind: Option<String>,

    /// CHNA describes significant health needs of the community
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/CommunityHealthNeedsInd",
        line = "Part V Section B Line 3e",
        max_length = 5
    )]
    pub community_health_needs_ind: Option<String>,

    /// CHNA describes primary and chronic disease needs
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/OtherHealthIssuesInd",
        line = "Part V Section B Line 3f",
        max_length = 5
    )]
    pub other_health_issues_ind: Option<String>,

    /// CHNA describes the process for identifying needs
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/CommunityHlthNeedsIdProcessInd",
        line = "Part V Section B Line 3g",
        max_length = 5
    )]
    pub community_hlth_needs_id_process_ind: Option<String>,

    /// CHNA describes the process for consulting the community
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ConsultingProcessInd",
        line = "Part V Section B Line 3h",
        max_length = 5
    )]
    pub consulting_process_ind: Option<String>,

    /// CHNA describes the impact of actions taken on prior needs
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/PriorCHNAImpactInd",
        line = "Part V Section B Line 3i",
        max_length = 5
    )]
    pub prior_chna_impact_ind: Option<String>,

    /// CHNA includes other information
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/OtherCHNAInfoInd",
        line = "Part V Section B Line 3j",
        max_length = 5
    )]
    pub other_chna_info_ind: Option<String>,

    /// Year of the most recent CHNA
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/CHNAConductedYr",
        line = "Part V Section B Line 4"
    )]
    pub chna_conducted_yr: Option<i32>,

    /// CHNA took into account input from persons representing the community
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/TakeIntoAccountOthersInputInd",
        line = "Part V Section B Line 5",
        max_length = 5
    )]
    pub take_into_account_others_input_ind: Option<String>,

    /// CHNA conducted with other hospital facilities
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ConductedWithOtherFacilitiesInd",
        line = "Part V Section B Line 6a",
        max_length = 5
    )]
    pub conducted_with_other_facilities_ind: Option<String>,

    /// CHNA conducted with non-hospital facilities
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ConductedWithNonFacilitiesInd",
        line = "Part V Section B Line 6b",
        max_length = 5
    )]
    pub conducted_with_non_facilities_ind: Option<String>,

    /// CHNA report made widely available to the public
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/CHNAReportWidelyAvailableInd",
        line = "Part V Section B Line 7",
        max_length = 5
    )]
    pub chna_report_widely_available_ind: Option<String>,

    /// CHNA posted on the hospital facility's website
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/HospitalFacilityWebsiteInd",
        line = "Part V Section B Line 7a",
        max_length = 5
    )]
    pub hospital_facility_website_ind: Option<String>,

    /// CHNA posted on another website
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/OtherWebsiteInd",
        line = "Part V Section B Line 7b",
        max_length = 5
    )]
    pub other_website_ind: Option<String>,

    /// CHNA paper copy available for public inspection
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/PaperCopyPublicInspectionInd",
        line = "Part V Section B Line 7c",
        max_length = 5
    )]
    pub paper_copy_public_inspection_ind: Option<String>,

    /// CHNA made available by other means
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/OtherMethodsInd",
        line = "Part V Section B Line 7d",
        max_length = 5
    )]
    pub other_methods_ind: Option<String>,

    /// Implementation strategy adopted to meet identified needs
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ImplementationStrategyAdoptInd",
        line = "Part V Section B Line 8",
        max_length = 5
    )]
    pub implementation_strategy_adopt_ind: Option<String>,

    /// Year the implementation strategy was adopted
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/StrategyAdoptedYr",
        line = "Part V Section B Line 9"
    )]
    pub strategy_adopted_yr: Option<i32>,

    /// Implementation strategy posted on a website
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/StrategyPostedWebsiteInd",
        line = "Part V Section B Line 10",
        max_length = 5
    )]
    pub strategy_posted_website_ind: Option<String>,

    /// Section 4959 excise tax incurred for failure to conduct a CHNA
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ExciseTaxIncurredInd",
        line = "Part V Section B Line 12a",
        max_length = 5
    )]
    pub excise_tax_incurred_ind: Option<String>,

    /// Form 4720 filed to report the section 4959 excise tax
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/Form4720FiledInd",
        line = "Part V Section B Line 12b",
        max_length = 5
    )]
    pub form_4720_filed_ind: Option<String>,

    /// Section 4959 excise tax for all hospital facilities
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/Form4720ExciseTaxAmt",
        line = "Part V Section B Line 12c"
    )]
    pub form_4720_excise_tax_amt: Option<i64>,

    /// Written financial assistance policy
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/FinancialAssistancePolicyInd",
        line = "Part V Section B Line 13",
        max_length = 5
    )]
    pub financial_assistance_policy_ind: Option<String>,

    /// FPG family income limit for free care
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/FPGFamilyIncmLmtFreeCarePct",
        line = "Part V Section B Line 13a"
    )]
    pub fpg_family_incm_lmt_free_care_pct: Option<f64>,

    /// FPG family income limit for discounted care
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/FPGFamilyIncmLmtDscntCarePct",
        line = "Part V Section B Line 13a"
    )]
    pub fpg_family_incm_lmt_dscnt_care_pct: Option<f64>,

    /// Financial assistance policy widely publicized
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/FAPWidelyPublicizedInd",
        line = "Part V Section B Line 16",
        max_length = 5
    )]
    pub fap_widely_publicized_ind: Option<String>,

    /// Separate billing and collections policy
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/BillingAndCollectionsPolicyInd",
        line = "Part V Section B Line 17",
        max_length = 5
    )]
    pub billing_and_collections_policy_ind: Option<String>,

    /// Written policy relating to emergency medical care
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/EmergencyMedicalCarePolicyInd",
        line = "Part V Section B Line 21",
        max_length = 5
    )]
    pub emergency_medical_care_policy_ind: Option<String>,

    /// Charged eligible individuals more than amounts generally billed
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ChargedAmtGreaterThanGenInd",
        line = "Part V Section B Line 23",
        max_length = 5
    )]
    pub charged_amt_greater_than_gen_ind: Option<String>,

    /// Charged eligible individuals an amount equal to gross charges
    #[field(
        xpath = "/IRS990ScheduleH/HospitalFcltyPoliciesPrctcGrp/ChargedGrossChargesInd",
        line = "Part V Section B Line 24",
        max_length = 5
    )]
    pub charged_gross_charges_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_othrhlthcrfclts",
    form = "ScheduleH",
    part = "Part V Section D",
    description = "Other health care facilities that are not licensed as a hospital",
    group = "/IRS990ScheduleH/OtherHealthCareFacilitiesGrp",
    parent = "return_skedh_part_i"
)]
pub struct OtherHealthCareFacilities {
    pub object_id: String,
    pub ein: String,

    /// Name of facility
    #[field(
        xpath = "/IRS990ScheduleH/OtherHealthCareFacilitiesGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part V Section D"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Street address
    #[field(
        xpath = "/IRS990ScheduleH/OtherHealthCareFacilitiesGrp/USAddress/AddressLine1Txt",
        line = "Part V Section D"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990ScheduleH/OtherHealthCareFacilitiesGrp/USAddress/CityNm",
        line = "Part V Section D",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990ScheduleH/OtherHealthCareFacilitiesGrp/USAddress/StateAbbreviationCd",
        line = "Part V Section D",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990ScheduleH/OtherHealthCareFacilitiesGrp/USAddress/ZIPCd",
        line = "Part V Section D",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Type of facility
    #[field(
        xpath = "/IRS990ScheduleH/OtherHealthCareFacilitiesGrp/FacilityTypeDesc",
        line = "Part V Section D",
        long
    )]
    pub facility_type_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedh_spplmntlinfrmtndtl",
    form = "ScheduleH",
    part = "Part VI",
    description = "Supplemental information",
    group = "/IRS990ScheduleH/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleH/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part VI"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleH/SupplementalInformationDetail/ExplanationTxt", line = "Part VI", long)]
    pub explanation_txt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormTable};

    #[test]
    fn test_community_building_grid() {
        let table = PartII::definition();
        let total = table
            .column("TtlCmmnttyBldngActy_NtCmmntyBnftExpnsAmt")
            .expect("total net expense");
        assert_eq!(total.field_type, FieldType::BigInteger);
        assert_eq!(total.line_number.as_deref(), Some("Part II Line 10 Column e"));
        let share = table.column("CltnBldng_TtlExpnsPct").expect("percent of expense");
        assert_eq!(share.field_type, FieldType::Decimal);
    }

    #[test]
    fn test_facility_groups_hang_off_part_i() {
        for table in [
            HospitalFacilities::definition(),
            HospitalFcltyPoliciesPrctc::definition(),
            OtherHealthCareFacilities::definition(),
            ManagementCoAndJointVentures::definition(),
        ] {
            assert!(table.is_repeating(), "{}", table.name());
            assert_eq!(table.parent(), Some("return_skedh_part_i"));
        }
    }
}
