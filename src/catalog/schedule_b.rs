//! Schedule B: Schedule of Contributors.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        ContributorInformation::definition(),
        NonCashPropertyContribution::definition(),
        CharitableContributionsDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedb_cntrbtrinfrmtn",
    form = "ScheduleB",
    part = "Part I",
    description = "Contributors",
    group = "/IRS990ScheduleB/ContributorInformationGrp"
)]
pub struct ContributorInformation {
    pub object_id: String,
    pub ein: String,

    /// Contributor number
    #[field(xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorNum", line = "Part I Column A")]
    pub contributor_num: Option<i32>,

    /// Contributor name (person)
    #[field(xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorPersonNm", line = "Part I Column B")]
    pub contributor_person_nm: Option<String>,

    /// Contributor name (business)
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorBusinessName/BusinessNameLine1Txt",
        line = "Part I Column B"
    )]
    pub contributor_business_name_txt: Option<String>,

    /// Contributor city
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorUSAddress/CityNm",
        line = "Part I Column B",
        max_length = 22
    )]
    pub contributor_city_nm: Option<String>,

    /// Contributor state
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorUSAddress/StateAbbreviationCd",
        line = "Part I Column B",
        max_length = 2
    )]
    pub contributor_state_cd: Option<String>,

    /// Total contributions
    #[field(xpath = "/IRS990ScheduleB/ContributorInformationGrp/TotalContributionsAmt", line = "Part I Column C")]
    pub total_contributions_amt: Option<i64>,

    /// Person contribution
    #[field(xpath = "/IRS990ScheduleB/ContributorInformationGrp/PersonContributionInd", line = "Part I Column D", max_length = 5)]
    pub person_contribution_ind: Option<String>,

    /// Payroll contribution
    #[field(xpath = "/IRS990ScheduleB/ContributorInformationGrp/PayrollContributionInd", line = "Part I Column D", max_length = 5)]
    pub payroll_contribution_ind: Option<String>,

    /// Noncash contribution
    #[field(xpath = "/IRS990ScheduleB/ContributorInformationGrp/NoncashContributionInd", line = "Part I Column D", max_length = 5)]
    pub noncash_contribution_ind: Option<String>,

    /// Contributor name (business), continued
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorBusinessName/BusinessNameLine2Txt",
        line = "Part I Column B"
    )]
    pub business_name_line_2_txt: Option<String>,

    /// Contributor street address
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorUSAddress/AddressLine1Txt",
        line = "Part I Column B"
    )]
    pub address_line_1_txt: Option<String>,

    /// Contributor street address, continued
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorUSAddress/AddressLine2Txt",
        line = "Part I Column B"
    )]
    pub address_line_2_txt: Option<String>,

    /// Contributor ZIP code
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorUSAddress/ZIPCd",
        line = "Part I Column B",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Contributor foreign street address
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorForeignAddress/AddressLine1Txt",
        line = "Part I Column B"
    )]
    pub contributor_foreign_address_address_line_1_txt: Option<String>,

    /// Contributor foreign city
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorForeignAddress/CityNm",
        line = "Part I Column B",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// Contributor foreign province or state
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorForeignAddress/ProvinceOrStateNm",
        line = "Part I Column B"
    )]
    pub province_or_state_nm: Option<String>,

    /// Contributor country
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorForeignAddress/CountryCd",
        line = "Part I Column B",
        max_length = 2
    )]
    pub country_cd: Option<String>,

    /// Contributor foreign postal code
    #[field(
        xpath = "/IRS990ScheduleB/ContributorInformationGrp/ContributorForeignAddress/ForeignPostalCd",
        line = "Part I Column B"
    )]
    pub foreign_postal_cd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedb_nncshprprtycntrbtn",
    form = "ScheduleB",
    part = "Part II",
    description = "Noncash property contributions",
    group = "/IRS990ScheduleB/NonCashPropertyContributionGrp"
)]
pub struct NonCashPropertyContribution {
    pub object_id: String,
    pub ein: String,

    /// Number from Part I
    #[field(
        xpath = "/IRS990ScheduleB/NonCashPropertyContributionGrp/ContributorNum",
        line = "Part II Column a"
    )]
    pub contributor_num: Option<String>,

    /// Description of noncash property
    #[field(
        xpath = "/IRS990ScheduleB/NonCashPropertyContributionGrp/PropertyDescriptionTxt",
        line = "Part II Column b",
        long
    )]
    pub property_description_txt: Option<String>,

    /// Fair market value or estimate
    #[field(
        xpath = "/IRS990ScheduleB/NonCashPropertyContributionGrp/FairMarketValueAmt",
        line = "Part II Column c"
    )]
    pub fair_market_value_amt: Option<i64>,

    /// Date received
    #[field(
        xpath = "/IRS990ScheduleB/NonCashPropertyContributionGrp/ReceivedDt",
        line = "Part II Column d",
        date
    )]
    pub received_dt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedb_chrtblcntrbtnsdtl",
    form = "ScheduleB",
    part = "Part III",
    description = "Exclusively religious, charitable or similar contributions",
    group = "/IRS990ScheduleB/CharitableContributionsDetail"
)]
pub struct CharitableContributionsDetail {
    pub object_id: String,
    pub ein: String,

    /// Number from Part I
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/ContributorNum",
        line = "Part III Column a"
    )]
    pub contributor_num: Option<String>,

    /// Purpose of gift
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/GiftPurposeTxt",
        line = "Part III Column b",
        long
    )]
    pub gift_purpose_txt: Option<String>,

    /// Use of gift
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/GiftUseTxt",
        line = "Part III Column c",
        long
    )]
    pub gift_use_txt: Option<String>,

    /// Description of how gift is held
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/GiftHeldDesc",
        line = "Part III Column d",
        long
    )]
    pub gift_held_desc: Option<String>,

    /// Transferee name (person)
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/TransfereeIndividualNm",
        line = "Part III Column e"
    )]
    pub transferee_individual_nm: Option<String>,

    /// Transferee name (business)
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/TransfereeBusinessName/BusinessNameLine1Txt",
        line = "Part III Column e"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Transferee street address
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/TransfereeUSAddress/AddressLine1Txt",
        line = "Part III Column e"
    )]
    pub address_line_1_txt: Option<String>,

    /// Transferee city
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/TransfereeUSAddress/CityNm",
        line = "Part III Column e",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// Transferee state
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/TransfereeUSAddress/StateAbbreviationCd",
        line = "Part III Column e",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// Transferee ZIP code
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/TransfereeUSAddress/ZIPCd",
        line = "Part III Column e",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// Relationship of transferor to transferee
    #[field(
        xpath = "/IRS990ScheduleB/CharitableContributionsDetail/RelationshipOfTransferorTxt",
        line = "Part III Column e"
    )]
    pub relationship_of_transferor_txt: Option<String>,
}
