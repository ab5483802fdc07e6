//! Schedule J: Compensation Information.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        RltdOrgOfficerTrstKeyEmpl::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedj_part_i",
    form = "ScheduleJ",
    part = "Part I",
    description = "Questions regarding compensation"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// First-class or charter travel
    #[field(xpath = "/IRS990ScheduleJ/FirstClassOrCharterTravelInd", line = "Part I Line 1a", max_length = 5)]
    pub first_class_or_charter_travel_ind: Option<String>,

    /// Travel for companions
    #[field(xpath = "/IRS990ScheduleJ/TravelForCompanionsInd", line = "Part I Line 1a", max_length = 5)]
    pub travel_for_companions_ind: Option<String>,

    /// Written policy on expense reimbursement
    #[field(xpath = "/IRS990ScheduleJ/WrittenPolicyRefTAndEExpnssInd", line = "Part I Line 2", max_length = 5)]
    pub written_policy_ref_t_and_e_expnss_ind: Option<String>,

    /// Compensation committee
    #[field(xpath = "/IRS990ScheduleJ/CompensationCommitteeInd", line = "Part I Line 3", max_length = 5)]
    pub compensation_committee_ind: Option<String>,

    /// Independent compensation consultant
    #[field(xpath = "/IRS990ScheduleJ/IndependentConsultantInd", line = "Part I Line 3", max_length = 5)]
    pub independent_consultant_ind: Option<String>,

    /// Severance payment
    #[field(xpath = "/IRS990ScheduleJ/SeverancePaymentInd", line = "Part I Line 4a", max_length = 5)]
    pub severance_payment_ind: Option<String>,

    /// Supplemental nonqualified retirement plan
    #[field(xpath = "/IRS990ScheduleJ/SupplementalNonqualRetirePlanInd", line = "Part I Line 4b", max_length = 5)]
    pub supplemental_nonqual_retire_plan_ind: Option<String>,

    /// Tax indemnification and gross-up payments
    #[field(
        xpath = "/IRS990ScheduleJ/TaxIndemnificationAndGrossUpInd",
        line = "Part I Line 1a",
        max_length = 5
    )]
    pub tax_indemnification_and_gross_up_ind: Option<String>,

    /// Discretionary spending account
    #[field(xpath = "/IRS990ScheduleJ/DiscretionarySpendingAcctInd", line = "Part I Line 1a", max_length = 5)]
    pub discretionary_spending_acct_ind: Option<String>,

    /// Housing allowance or residence for personal use
    #[field(
        xpath = "/IRS990ScheduleJ/HousingAllowanceOrResidenceInd",
        line = "Part I Line 1a",
        max_length = 5
    )]
    pub housing_allowance_or_residence_ind: Option<String>,

    /// Payments for business use of personal residence
    #[field(xpath = "/IRS990ScheduleJ/PaymentsForUseOfResidenceInd", line = "Part I Line 1a", max_length = 5)]
    pub payments_for_use_of_residence_ind: Option<String>,

    /// Health or social club dues or initiation fees
    #[field(xpath = "/IRS990ScheduleJ/HealthOrSocialClubDuesInd", line = "Part I Line 1a", max_length = 5)]
    pub health_or_social_club_dues_ind: Option<String>,

    /// Personal services
    #[field(xpath = "/IRS990ScheduleJ/PersonalServicesInd", line = "Part I Line 1a", max_length = 5)]
    pub personal_services_ind: Option<String>,

    /// Written policy on payment or reimbursement of these expenses
    #[field(xpath = "/IRS990ScheduleJ/WrittenPolicyOrProcedureInd", line = "Part I Line 1b", max_length = 5)]
    pub written_policy_or_procedure_ind: Option<String>,

    /// Form 990 of other organizations used to set compensation
    #[field(
        xpath = "/IRS990ScheduleJ/Form990OfOtherOrganizationsInd",
        line = "Part I Line 3",
        max_length = 5
    )]
    pub form_990_of_other_organizations_ind: Option<String>,

    /// Written employment contract used to set compensation
    #[field(xpath = "/IRS990ScheduleJ/WrittenEmploymentContractInd", line = "Part I Line 3", max_length = 5)]
    pub written_employment_contract_ind: Option<String>,

    /// Compensation survey or study used to set compensation
    #[field(xpath = "/IRS990ScheduleJ/CompensationSurveyInd", line = "Part I Line 3", max_length = 5)]
    pub compensation_survey_ind: Option<String>,

    /// Approval by the board or compensation committee
    #[field(xpath = "/IRS990ScheduleJ/BoardOrCommitteeApprovalInd", line = "Part I Line 3", max_length = 5)]
    pub board_or_committee_approval_ind: Option<String>,

    /// Participated in or received payment from an equity-based arrangement
    #[field(xpath = "/IRS990ScheduleJ/EquityBasedCompArrngmInd", line = "Part I Line 4c", max_length = 5)]
    pub equity_based_comp_arrngm_ind: Option<String>,

    /// Compensation contingent on revenues of the filing organization
    #[field(xpath = "/IRS990ScheduleJ/CompBasedOnRevenueFlngOrgInd", line = "Part I Line 5a", max_length = 5)]
    pub comp_based_on_revenue_flng_org_ind: Option<String>,

    /// Compensation contingent on revenues of related organizations
    #[field(
        xpath = "/IRS990ScheduleJ/CompBasedOnRevenueRltdOrgsInd",
        line = "Part I Line 5b",
        max_length = 5
    )]
    pub comp_based_on_revenue_rltd_orgs_ind: Option<String>,

    /// Compensation contingent on net earnings of the filing organization
    #[field(xpath = "/IRS990ScheduleJ/CompBsdNetEarnsFlngOrgInd", line = "Part I Line 6a", max_length = 5)]
    pub comp_bsd_net_earns_flng_org_ind: Option<String>,

    /// Compensation contingent on net earnings of related organizations
    #[field(xpath = "/IRS990ScheduleJ/CompBsdNetEarnsRltdOrgsInd", line = "Part I Line 6b", max_length = 5)]
    pub comp_bsd_net_earns_rltd_orgs_ind: Option<String>,

    /// Non-fixed payments provided
    #[field(xpath = "/IRS990ScheduleJ/AnyNonFixedPaymentsInd", line = "Part I Line 7", max_length = 5)]
    pub any_non_fixed_payments_ind: Option<String>,

    /// Payments made under a contract subject to the initial contract exception
    #[field(xpath = "/IRS990ScheduleJ/InitialContractExceptionInd", line = "Part I Line 8", max_length = 5)]
    pub initial_contract_exception_ind: Option<String>,

    /// Followed the rebuttable presumption procedure
    #[field(xpath = "/IRS990ScheduleJ/RebuttablePresumptionProcInd", line = "Part I Line 9", max_length = 5)]
    pub rebuttable_presumption_proc_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedj_rltdorgoffcrtrstkyempl",
    form = "ScheduleJ",
    part = "Part II",
    description = "Officers, directors, trustees, key employees and highest compensated employees",
    group = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp",
    parent = "return_skedj_part_i"
)]
pub struct RltdOrgOfficerTrstKeyEmpl {
    pub object_id: String,
    pub ein: String,

    /// Name of person
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/PersonNm", line = "Part II Column A")]
    pub person_nm: Option<String>,

    /// Title
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/TitleTxt", line = "Part II Column A")]
    pub title_txt: Option<String>,

    /// Base compensation from the organization
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/BaseCompensationFilingOrgAmt", line = "Part II Column B(i)")]
    pub base_compensation_filing_org_amt: Option<i64>,

    /// Bonus and incentive compensation from the organization
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/BonusFilingOrganizationAmount", line = "Part II Column B(ii)")]
    pub bonus_filing_organization_amount: Option<i64>,

    /// Other reportable compensation from the organization
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/OtherCompensationFilingOrgAmt", line = "Part II Column B(iii)")]
    pub other_compensation_filing_org_amt: Option<i64>,

    /// Deferred compensation from the organization
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/DeferredCompensationFlngOrgAmt", line = "Part II Column C")]
    pub deferred_compensation_flng_org_amt: Option<i64>,

    /// Nontaxable benefits from the organization
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/NontaxableBenefitsFilingOrgAmt", line = "Part II Column D")]
    pub nontaxable_benefits_filing_org_amt: Option<i64>,

    /// Total compensation from the organization
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/TotalCompensationFilingOrgAmt", line = "Part II Column E")]
    pub total_compensation_filing_org_amt: Option<i64>,

    /// Total compensation from related organizations
    #[field(xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/TotalCompensationRltdOrgsAmt", line = "Part II Column E")]
    pub total_compensation_rltd_orgs_amt: Option<i64>,

    /// Name of business
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part II Column A"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Base compensation from related organizations
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/BaseCompensationRltdOrgsAmt",
        line = "Part II Column B(i)"
    )]
    pub base_compensation_rltd_orgs_amt: Option<i64>,

    /// Bonus and incentive compensation from related organizations
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/BonusRelatedOrganizationsAmt",
        line = "Part II Column B(ii)"
    )]
    pub bonus_related_organizations_amt: Option<i64>,

    /// Other reportable compensation from related organizations
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/OtherCompensationRltdOrgsAmt",
        line = "Part II Column B(iii)"
    )]
    pub other_compensation_rltd_orgs_amt: Option<i64>,

    /// Deferred compensation from related organizations
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/DeferredCompRltdOrgsAmt",
        line = "Part II Column C"
    )]
    pub deferred_comp_rltd_orgs_amt: Option<i64>,

    /// Nontaxable benefits from related organizations
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/NontaxableBenefitsRltdOrgsAmt",
        line = "Part II Column D"
    )]
    pub nontaxable_benefits_rltd_orgs_amt: Option<i64>,

    /// Compensation reported as deferred on a prior Form 990
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/CompReportPrior990FilingOrgAmt",
        line = "Part II Column F"
    )]
    pub comp_report_prior_990_filing_org_amt: Option<i64>,

    /// Compensation reported as deferred on a prior related organization Form 990
    #[field(
        xpath = "/IRS990ScheduleJ/RltdOrgOfficerTrstKeyEmplGrp/CompReportPrior990RltdOrgsAmt",
        line = "Part II Column F"
    )]
    pub comp_report_prior_990_rltd_orgs_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedj_spplmntlinfrmtndtl",
    form = "ScheduleJ",
    part = "Part III",
    description = "Supplemental information",
    group = "/IRS990ScheduleJ/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleJ/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part III"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleJ/SupplementalInformationDetail/ExplanationTxt", line = "Part III", long)]
    pub explanation_txt: Option<String>,
}
