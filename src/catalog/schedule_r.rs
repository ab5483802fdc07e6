//! Schedule R: Related Organizations and Unrelated Partnerships.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        IdDisregardedEntities::definition(),
        IdRelatedTaxExemptOrg::definition(),
        IdRelatedOrgTxblPartnership::definition(),
        IdRelatedOrgTxblCorpTr::definition(),
        PartV::definition(),
        TransactionsRelatedOrg::definition(),
        UnrelatedOrgTxblPartnership::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_iddsrgrddentts",
    form = "ScheduleR",
    part = "Part I",
    description = "Disregarded entities",
    group = "/IRS990ScheduleR/IdDisregardedEntitiesGrp"
)]
pub struct IdDisregardedEntities {
    pub object_id: String,
    pub ein: String,

    /// Name of disregarded entity
    #[field(xpath = "/IRS990ScheduleR/IdDisregardedEntitiesGrp/DisregardedEntityName/BusinessNameLine1Txt", line = "Part I Column a")]
    pub disregarded_entity_name_txt: Option<String>,

    /// EIN of disregarded entity
    #[field(xpath = "/IRS990ScheduleR/IdDisregardedEntitiesGrp/EIN", line = "Part I Column a", name = "DsrgrddEnttyEIN", max_length = 9)]
    pub disregarded_entity_ein: Option<String>,

    /// Primary activity
    #[field(xpath = "/IRS990ScheduleR/IdDisregardedEntitiesGrp/PrimaryActivitiesTxt", line = "Part I Column b")]
    pub primary_activities_txt: Option<String>,

    /// Legal domicile (state)
    #[field(xpath = "/IRS990ScheduleR/IdDisregardedEntitiesGrp/LegalDomicileStateCd", line = "Part I Column c", max_length = 2)]
    pub legal_domicile_state_cd: Option<String>,

    /// Total income
    #[field(xpath = "/IRS990ScheduleR/IdDisregardedEntitiesGrp/TotalIncomeAmt", line = "Part I Column d")]
    pub total_income_amt: Option<i64>,

    /// End-of-year assets
    #[field(xpath = "/IRS990ScheduleR/IdDisregardedEntitiesGrp/EndOfYearAssetsAmt", line = "Part I Column e")]
    pub end_of_year_assets_amt: Option<i64>,

    /// Direct controlling entity
    #[field(xpath = "/IRS990ScheduleR/IdDisregardedEntitiesGrp/DirectControllingEntityName/BusinessNameLine1Txt", line = "Part I Column f")]
    pub direct_controlling_entity_name_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_idrltdtxexmptorg",
    form = "ScheduleR",
    part = "Part II",
    description = "Related tax-exempt organizations",
    group = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp"
)]
pub struct IdRelatedTaxExemptOrg {
    pub object_id: String,
    pub ein: String,

    /// Name of related organization
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/DisregardedEntityName/BusinessNameLine1Txt",
        line = "Part II Column a"
    )]
    pub related_org_name_txt: Option<String>,

    /// EIN of related organization
    #[field(xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/EIN", line = "Part II Column a", name = "RltdOrgEIN", max_length = 9)]
    pub related_org_ein: Option<String>,

    /// Primary activity
    #[field(xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/PrimaryActivitiesTxt", line = "Part II Column b")]
    pub primary_activities_txt: Option<String>,

    /// Legal domicile (state)
    #[field(xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/LegalDomicileStateCd", line = "Part II Column c", max_length = 2)]
    pub legal_domicile_state_cd: Option<String>,

    /// Exempt code section
    #[field(xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/ExemptCodeSectionTxt", line = "Part II Column d")]
    pub exempt_code_section_txt: Option<String>,

    /// Public charity status
    #[field(xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/PublicCharityStatusTxt", line = "Part II Column e")]
    pub public_charity_status_txt: Option<String>,

    /// Direct controlling entity
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/DirectControllingEntityName/BusinessNameLine1Txt",
        line = "Part II Column f"
    )]
    pub direct_controlling_entity_name_txt: Option<String>,

    /// Controlled entity under section 512(b)(13)
    #[field(xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/ControlledOrganizationInd", line = "Part II Column g", max_length = 5)]
    pub controlled_organization_ind: Option<String>,

    /// Street address
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/USAddress/AddressLine1Txt",
        line = "Part II Column a"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/USAddress/CityNm",
        line = "Part II Column a",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/USAddress/StateAbbreviationCd",
        line = "Part II Column a",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedTaxExemptOrgGrp/USAddress/ZIPCd",
        line = "Part II Column a",
        max_length = 10
    )]
    pub zip_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_idrltdorgtxblprtnrshp",
    form = "ScheduleR",
    part = "Part III",
    description = "Related organizations taxable as a partnership",
    group = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp"
)]
pub struct IdRelatedOrgTxblPartnership {
    pub object_id: String,
    pub ein: String,

    /// Name of related organization
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/RelatedOrganizationName/BusinessNameLine1Txt",
        line = "Part III Column a"
    )]
    pub related_organization_name_txt: Option<String>,

    /// EIN of related organization
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/EIN", line = "Part III Column a", name = "RltdOrgEIN", max_length = 9)]
    pub related_org_ein: Option<String>,

    /// Primary activity
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/PrimaryActivitiesTxt", line = "Part III Column b")]
    pub primary_activities_txt: Option<String>,

    /// Predominant income type
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/PredominantIncomeDesc", line = "Part III Column e")]
    pub predominant_income_desc: Option<String>,

    /// Share of total income
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/ShareOfTotalIncomeAmt", line = "Part III Column f")]
    pub share_of_total_income_amt: Option<i64>,

    /// Share of end-of-year assets
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/ShareOfEOYAssetsAmt", line = "Part III Column g")]
    pub share_of_eoy_assets_amt: Option<i64>,

    /// Percentage ownership
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/OwnershipPct", line = "Part III Column k")]
    pub ownership_pct: Option<f64>,

    /// Street address
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/USAddress/AddressLine1Txt",
        line = "Part III Column a"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/USAddress/CityNm",
        line = "Part III Column a",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/USAddress/StateAbbreviationCd",
        line = "Part III Column a",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/USAddress/ZIPCd",
        line = "Part III Column a",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Legal domicile
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/LegalDomicileStateCd",
        line = "Part III Column c",
        max_length = 2
    )]
    pub legal_domicile_state_cd: Option<String>,

    /// Direct controlling entity
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/DirectControllingEntityName/BusinessNameLine1Txt",
        line = "Part III Column d"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Disproportionate allocations
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/DisproportionateAllocationsInd",
        line = "Part III Column h",
        max_length = 5
    )]
    pub disproportionate_allocations_ind: Option<String>,

    /// Code V-UBI amount in box 20 of Schedule K-1
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/UBICodeVAmt",
        line = "Part III Column i"
    )]
    pub ubi_code_v_amt: Option<i64>,

    /// General or managing partner
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblPartnershipGrp/GeneralOrManagingPartnerInd",
        line = "Part III Column j",
        max_length = 5
    )]
    pub general_or_managing_partner_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_idrltdorgtxblcrptr",
    form = "ScheduleR",
    part = "Part IV",
    description = "Related organizations taxable as a corporation or trust",
    group = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp"
)]
pub struct IdRelatedOrgTxblCorpTr {
    pub object_id: String,
    pub ein: String,

    /// Name of related organization
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/RelatedOrganizationName/BusinessNameLine1Txt",
        line = "Part IV Column a"
    )]
    pub related_organization_name_txt: Option<String>,

    /// EIN of related organization
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/EIN", line = "Part IV Column a", name = "RltdOrgEIN", max_length = 9)]
    pub related_org_ein: Option<String>,

    /// Primary activity
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/PrimaryActivitiesTxt", line = "Part IV Column b")]
    pub primary_activities_txt: Option<String>,

    /// Entity type
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/EntityTypeTxt", line = "Part IV Column e")]
    pub entity_type_txt: Option<String>,

    /// Share of total income
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/ShareOfTotalIncomeAmt", line = "Part IV Column f")]
    pub share_of_total_income_amt: Option<i64>,

    /// Share of end-of-year assets
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/ShareOfEOYAssetsAmt", line = "Part IV Column g")]
    pub share_of_eoy_assets_amt: Option<i64>,

    /// Percentage ownership
    #[field(xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/OwnershipPct", line = "Part IV Column h")]
    pub ownership_pct: Option<f64>,

    /// Street address
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/USAddress/AddressLine1Txt",
        line = "Part IV Column a"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/USAddress/CityNm",
        line = "Part IV Column a",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/USAddress/StateAbbreviationCd",
        line = "Part IV Column a",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/USAddress/ZIPCd",
        line = "Part IV Column a",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Legal domicile
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/LegalDomicileStateCd",
        line = "Part IV Column c",
        max_length = 2
    )]
    pub legal_domicile_state_cd: Option<String>,

    /// Direct controlling entity
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/DirectControllingEntityName/BusinessNameLine1Txt",
        line = "Part IV Column d"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Section 512(b)(13) controlled entity
    #[field(
        xpath = "/IRS990ScheduleR/IdRelatedOrgTxblCorpTrGrp/SectionControlledEntityInd",
        line = "Part IV Column i",
        max_length = 5
    )]
    pub section_controlled_entity_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_part_v",
    form = "ScheduleR",
    part = "Part V",
    description = "Transactions with related organizations"
)]
pub struct PartV {
    pub object_id: String,
    pub ein: String,

    /// Receipt of interest, annuities, royalties or rent from a controlled entity
    #[field(xpath = "/IRS990ScheduleR/ReceiptOfIntAnntsRntsRyltsInd", line = "Part V Line 1a", max_length = 5)]
    pub receipt_of_int_annts_rnts_rylts_ind: Option<String>,

    /// Gift, grant or capital contribution to related organizations
    #[field(xpath = "/IRS990ScheduleR/GiftGrntOrCapContriToOthOrgInd", line = "Part V Line 1b", max_length = 5)]
    pub gift_grnt_or_cap_contri_to_oth_org_ind: Option<String>,

    /// Gift, grant or capital contribution from related organizations
    #[field(xpath = "/IRS990ScheduleR/GiftGrntCapContriFromOthOrgInd", line = "Part V Line 1c", max_length = 5)]
    pub gift_grnt_cap_contri_from_oth_org_ind: Option<String>,

    /// Loans or loan guarantees to or for related organizations
    #[field(xpath = "/IRS990ScheduleR/LoansOrGuaranteesToOthOrgInd", line = "Part V Line 1d", max_length = 5)]
    pub loans_or_guarantees_to_oth_org_ind: Option<String>,

    /// Sale of assets to related organizations
    #[field(xpath = "/IRS990ScheduleR/SaleOfAssetsToOtherOrgInd", line = "Part V Line 1f", max_length = 5)]
    pub sale_of_assets_to_other_org_ind: Option<String>,

    /// Sharing of facilities, equipment, mailing lists or other assets
    #[field(xpath = "/IRS990ScheduleR/SharingOfFacilitiesInd", line = "Part V Line 1n", max_length = 5)]
    pub sharing_of_facilities_ind: Option<String>,

    /// Reimbursement paid to related organizations for expenses
    #[field(xpath = "/IRS990ScheduleR/ReimbursementPdToOtherOrgInd", line = "Part V Line 1q", max_length = 5)]
    pub reimbursement_pd_to_other_org_ind: Option<String>,

    /// Loans or loan guarantees by related organization
    #[field(
        xpath = "/IRS990ScheduleR/LoansOrGuaranteesFromOthOrgInd",
        line = "Part V Line 1e",
        max_length = 5
    )]
    pub loans_or_guarantees_from_oth_org_ind: Option<String>,

    /// Dividends from related organization
    #[field(xpath = "/IRS990ScheduleR/DividendsFromRelatedOrgInd", line = "Part V Line 1f", max_length = 5)]
    pub dividends_from_related_org_ind: Option<String>,

    /// Purchase of assets from related organization
    #[field(
        xpath = "/IRS990ScheduleR/PurchaseOfAssetsFromOthOrgInd",
        line = "Part V Line 1g",
        max_length = 5
    )]
    pub purchase_of_assets_from_oth_org_ind: Option<String>,

    /// Exchange of assets with related organization
    #[field(xpath = "/IRS990ScheduleR/ExchangeOfAssetsInd", line = "Part V Line 1h", max_length = 5)]
    pub exchange_of_assets_ind: Option<String>,

    /// Lease of facilities, equipment or other assets to related organization
    #[field(xpath = "/IRS990ScheduleR/LeaseFcltsToOtherOrgInd", line = "Part V Line 1i", max_length = 5)]
    pub lease_fclts_to_other_org_ind: Option<String>,

    /// Lease of facilities, equipment or other assets from related organization
    #[field(xpath = "/IRS990ScheduleR/LeaseFcltsFromOtherOrgInd", line = "Part V Line 1j", max_length = 5)]
    pub lease_fclts_from_other_org_ind: Option<String>,

    /// Performance of services or fundraising for related organization
    #[field(
        xpath = "/IRS990ScheduleR/PerformOfServicesForOthOrgInd",
        line = "Part V Line 1k",
        max_length = 5
    )]
    pub perform_of_services_for_oth_org_ind: Option<String>,

    /// Performance of services or fundraising by related organization
    #[field(
        xpath = "/IRS990ScheduleR/PerformOfServicesByOtherOrgInd",
        line = "Part V Line 1l",
        max_length = 5
    )]
    pub perform_of_services_by_other_org_ind: Option<String>,

    /// Sharing of paid employees with related organization
    #[field(xpath = "/IRS990ScheduleR/SharingOfPaidEmployeesInd", line = "Part V Line 1o", max_length = 5)]
    pub sharing_of_paid_employees_ind: Option<String>,

    /// Reimbursement paid by related organization for expenses
    #[field(xpath = "/IRS990ScheduleR/ReimbursementPdByOtherOrgInd", line = "Part V Line 1p", max_length = 5)]
    pub reimbursement_pd_by_other_org_ind: Option<String>,

    /// Other transfer of cash or property to related organization
    #[field(xpath = "/IRS990ScheduleR/TransferToOtherOrgInd", line = "Part V Line 1r", max_length = 5)]
    pub transfer_to_other_org_ind: Option<String>,

    /// Other transfer of cash or property from related organization
    #[field(xpath = "/IRS990ScheduleR/TransferFromOtherOrgInd", line = "Part V Line 1s", max_length = 5)]
    pub transfer_from_other_org_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_trnsctnsrltdorg",
    form = "ScheduleR",
    part = "Part V",
    description = "Transactions with related organizations",
    group = "/IRS990ScheduleR/TransactionsRelatedOrgGrp",
    parent = "return_skedr_part_v"
)]
pub struct TransactionsRelatedOrg {
    pub object_id: String,
    pub ein: String,

    /// Name of related organization
    #[field(
        xpath = "/IRS990ScheduleR/TransactionsRelatedOrgGrp/OtherOrganizationName/BusinessNameLine1Txt",
        line = "Part V Line 2 Column a"
    )]
    pub other_organization_name_txt: Option<String>,

    /// Transaction type
    #[field(xpath = "/IRS990ScheduleR/TransactionsRelatedOrgGrp/TransactionTypeTxt", line = "Part V Line 2 Column b", max_length = 1)]
    pub transaction_type_txt: Option<String>,

    /// Amount involved
    #[field(xpath = "/IRS990ScheduleR/TransactionsRelatedOrgGrp/InvolvedAmt", line = "Part V Line 2 Column c")]
    pub involved_amt: Option<i64>,

    /// Method of determining amount involved
    #[field(xpath = "/IRS990ScheduleR/TransactionsRelatedOrgGrp/MethodOfAmountDeterminationTxt", line = "Part V Line 2 Column d")]
    pub method_of_amount_determination_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_unrltdorgtxblprtnrshp",
    form = "ScheduleR",
    part = "Part VI",
    description = "Unrelated organizations taxable as a partnership",
    group = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp"
)]
pub struct UnrelatedOrgTxblPartnership {
    pub object_id: String,
    pub ein: String,

    /// Name of entity
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/BusinessName/BusinessNameLine1Txt",
        line = "Part VI Column a"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Street address
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/USAddress/AddressLine1Txt",
        line = "Part VI Column a"
    )]
    pub address_line_1_txt: Option<String>,

    /// City
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/USAddress/CityNm",
        line = "Part VI Column a",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// State
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/USAddress/StateAbbreviationCd",
        line = "Part VI Column a",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// ZIP code
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/USAddress/ZIPCd",
        line = "Part VI Column a",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// EIN of entity
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/EIN",
        line = "Part VI Column a",
        name = "PrtnrshpEIN",
        max_length = 9
    )]
    pub ein_value: Option<String>,

    /// Primary activity
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/PrimaryActivitiesTxt",
        line = "Part VI Column b",
        long
    )]
    pub primary_activities_txt: Option<String>,

    /// Legal domicile
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/LegalDomicileStateCd",
        line = "Part VI Column c",
        max_length = 2
    )]
    pub legal_domicile_state_cd: Option<String>,

    /// Predominant income
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/PredominantIncomeDesc",
        line = "Part VI Column d",
        long
    )]
    pub predominant_income_desc: Option<String>,

    /// All partners section 501(c)(3) organizations
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/AllPartnersSection501c3Ind",
        line = "Part VI Column e",
        max_length = 5
    )]
    pub all_partners_section_501c3_ind: Option<String>,

    /// Share of total income
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/ShareOfTotalIncomeAmt",
        line = "Part VI Column f"
    )]
    pub share_of_total_income_amt: Option<i64>,

    /// Share of end-of-year assets
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/ShareOfEOYAssetsAmt",
        line = "Part VI Column g"
    )]
    pub share_of_eoy_assets_amt: Option<i64>,

    /// Disproportionate allocations
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/DisproportionateAllocationsInd",
        line = "Part VI Column h",
        max_length = 5
    )]
    pub disproportionate_allocations_ind: Option<String>,

    /// Code V-UBI amount in box 20 of Schedule K-1
    #[field(xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/UBICodeVAmt", line = "Part VI Column i")]
    pub ubi_code_v_amt: Option<i64>,

    /// General or managing partner
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/GeneralOrManagingPartnerInd",
        line = "Part VI Column j",
        max_length = 5
    )]
    pub general_or_managing_partner_ind: Option<String>,

    /// Percentage ownership
    #[field(
        xpath = "/IRS990ScheduleR/UnrelatedOrgTxblPartnershipGrp/OwnershipPct",
        line = "Part VI Column k"
    )]
    pub ownership_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedr_spplmntlinfrmtndtl",
    form = "ScheduleR",
    part = "Part VII",
    description = "Supplemental information",
    group = "/IRS990ScheduleR/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleR/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part VII"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleR/SupplementalInformationDetail/ExplanationTxt", line = "Part VII", long)]
    pub explanation_txt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, FormTable};

    #[test]
    fn test_related_org_ein_is_renamed() {
        for table in tables() {
            assert!(!table.has_column("EIN"), "{} exposes a bare EIN column", table.name());
        }
        let table = IdRelatedOrgTxblCorpTr::definition();
        assert_eq!(
            table.column("OwnrshpPct").map(|column| column.field_type),
            Some(FieldType::Decimal)
        );
    }
}
