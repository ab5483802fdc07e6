//! Schedule L: Transactions With Interested Persons.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        DisqualifiedPersonExBnftTr::definition(),
        LoansBtwnOrgInterestedPrsn::definition(),
        GrntAsstBnftInterestedPrsn::definition(),
        BusTrInvolveInterestedPrsn::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedl_part_i",
    form = "ScheduleL",
    part = "Part I",
    description = "Excess benefit transactions totals"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Tax incurred by disqualified persons under section 4958
    #[field(xpath = "/IRS990ScheduleL/TaxImposedAmt", line = "Part I Line 2")]
    pub tax_imposed_amt: Option<i64>,

    /// Tax reimbursed by the organization
    #[field(xpath = "/IRS990ScheduleL/TaxReimbursedByOrganizationAmt", line = "Part I Line 3")]
    pub tax_reimbursed_by_organization_amt: Option<i64>,

    /// Total balance due from loans with interested persons
    #[field(xpath = "/IRS990ScheduleL/TotalBalanceDueAmt", line = "Part II Total")]
    pub total_balance_due_amt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedl_dsqlfdprsnexbnfttr",
    form = "ScheduleL",
    part = "Part I",
    description = "Excess benefit transactions",
    group = "/IRS990ScheduleL/DisqualifiedPersonExBnftTrGrp",
    parent = "return_skedl_part_i"
)]
pub struct DisqualifiedPersonExBnftTr {
    pub object_id: String,
    pub ein: String,

    /// Name of disqualified person
    #[field(xpath = "/IRS990ScheduleL/DisqualifiedPersonExBnftTrGrp/DisqualifiedPersonNm", line = "Part I Line 1 Column a")]
    pub disqualified_person_nm: Option<String>,

    /// Relationship between disqualified person and organization
    #[field(xpath = "/IRS990ScheduleL/DisqualifiedPersonExBnftTrGrp/RelationshipDescriptionTxt", line = "Part I Line 1 Column b")]
    pub relationship_description_txt: Option<String>,

    /// Description of transaction
    #[field(xpath = "/IRS990ScheduleL/DisqualifiedPersonExBnftTrGrp/TransactionDesc", line = "Part I Line 1 Column c", long)]
    pub transaction_desc: Option<String>,

    /// Corrected
    #[field(xpath = "/IRS990ScheduleL/DisqualifiedPersonExBnftTrGrp/TransactionCorrectedInd", line = "Part I Line 1 Column d", max_length = 5)]
    pub transaction_corrected_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedl_lnsbtwnorgintrstdprsn",
    form = "ScheduleL",
    part = "Part II",
    description = "Loans to and from interested persons",
    group = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp",
    parent = "return_skedl_part_i"
)]
pub struct LoansBtwnOrgInterestedPrsn {
    pub object_id: String,
    pub ein: String,

    /// Name of interested person
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/PersonNm", line = "Part II Column a")]
    pub person_nm: Option<String>,

    /// Relationship with organization
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/RelationshipWithOrgTxt", line = "Part II Column b")]
    pub relationship_with_org_txt: Option<String>,

    /// Purpose of loan
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/LoanPurposeTxt", line = "Part II Column c")]
    pub loan_purpose_txt: Option<String>,

    /// Loan to the interested person
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/LoanToOrganizationInd", line = "Part II Column d", max_length = 5)]
    pub loan_to_organization_ind: Option<String>,

    /// Original principal amount
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/OriginalPrincipalAmt", line = "Part II Column e")]
    pub original_principal_amt: Option<i64>,

    /// Balance due
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/BalanceDueAmt", line = "Part II Column f")]
    pub balance_due_amt: Option<i64>,

    /// In default
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/DefaultInd", line = "Part II Column g", max_length = 5)]
    pub default_ind: Option<String>,

    /// Approved by board or committee
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/BoardOrCommitteeApprovalInd", line = "Part II Column h", max_length = 5)]
    pub board_or_committee_approval_ind: Option<String>,

    /// Written agreement
    #[field(xpath = "/IRS990ScheduleL/LoansBtwnOrgInterestedPrsnGrp/WrittenAgreementInd", line = "Part II Column i", max_length = 5)]
    pub written_agreement_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedl_grntasstbnftintrstdprsn",
    form = "ScheduleL",
    part = "Part III",
    description = "Grants or assistance benefiting interested persons",
    group = "/IRS990ScheduleL/GrntAsstBnftInterestedPrsnGrp",
    parent = "return_skedl_part_i"
)]
pub struct GrntAsstBnftInterestedPrsn {
    pub object_id: String,
    pub ein: String,

    /// Name of interested person (person)
    #[field(
        xpath = "/IRS990ScheduleL/GrntAsstBnftInterestedPrsnGrp/RecipientPersonNm",
        line = "Part III Column a"
    )]
    pub recipient_person_nm: Option<String>,

    /// Name of interested person (business)
    #[field(
        xpath = "/IRS990ScheduleL/GrntAsstBnftInterestedPrsnGrp/RecipientBusinessName/BusinessNameLine1Txt",
        line = "Part III Column a"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Relationship between interested person and the organization
    #[field(
        xpath = "/IRS990ScheduleL/GrntAsstBnftInterestedPrsnGrp/RelationshipWithOrgTxt",
        line = "Part III Column b"
    )]
    pub relationship_with_org_txt: Option<String>,

    /// Amount of assistance
    #[field(
        xpath = "/IRS990ScheduleL/GrntAsstBnftInterestedPrsnGrp/GrantOrAssistanceAmt",
        line = "Part III Column c"
    )]
    pub grant_or_assistance_amt: Option<i64>,

    /// Type of assistance
    #[field(
        xpath = "/IRS990ScheduleL/GrntAsstBnftInterestedPrsnGrp/TypeOfAssistanceTxt",
        line = "Part III Column d"
    )]
    pub type_of_assistance_txt: Option<String>,

    /// Purpose of assistance
    #[field(
        xpath = "/IRS990ScheduleL/GrntAsstBnftInterestedPrsnGrp/AssistancePurposeTxt",
        line = "Part III Column e",
        long
    )]
    pub assistance_purpose_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedl_bstrinvlvintrstdprsn",
    form = "ScheduleL",
    part = "Part IV",
    description = "Business transactions involving interested persons",
    group = "/IRS990ScheduleL/BusTrInvolveInterestedPrsnGrp",
    parent = "return_skedl_part_i"
)]
pub struct BusTrInvolveInterestedPrsn {
    pub object_id: String,
    pub ein: String,

    /// Name of interested person
    #[field(xpath = "/IRS990ScheduleL/BusTrInvolveInterestedPrsnGrp/NameOfInterested/PersonNm", line = "Part IV Column a")]
    pub name_of_interested_person_nm: Option<String>,

    /// Name of interested business
    #[field(
        xpath = "/IRS990ScheduleL/BusTrInvolveInterestedPrsnGrp/NameOfInterested/BusinessName/BusinessNameLine1Txt",
        line = "Part IV Column a"
    )]
    pub name_of_interested_business_txt: Option<String>,

    /// Relationship between interested person and organization
    #[field(xpath = "/IRS990ScheduleL/BusTrInvolveInterestedPrsnGrp/RelationshipDescriptionTxt", line = "Part IV Column b")]
    pub relationship_description_txt: Option<String>,

    /// Amount of transaction
    #[field(xpath = "/IRS990ScheduleL/BusTrInvolveInterestedPrsnGrp/TransactionAmt", line = "Part IV Column c")]
    pub transaction_amt: Option<i64>,

    /// Description of transaction
    #[field(xpath = "/IRS990ScheduleL/BusTrInvolveInterestedPrsnGrp/TransactionDesc", line = "Part IV Column d", long)]
    pub transaction_desc: Option<String>,

    /// Sharing of organization's revenues
    #[field(xpath = "/IRS990ScheduleL/BusTrInvolveInterestedPrsnGrp/SharingOfRevenuesInd", line = "Part IV Column e", max_length = 5)]
    pub sharing_of_revenues_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedl_spplmntlinfrmtndtl",
    form = "ScheduleL",
    part = "Part V",
    description = "Supplemental information",
    group = "/IRS990ScheduleL/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleL/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part V"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleL/SupplementalInformationDetail/ExplanationTxt", line = "Part V", long)]
    pub explanation_txt: Option<String>,
}
