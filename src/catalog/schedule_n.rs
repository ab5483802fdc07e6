//! Schedule N: Liquidation, Termination, Dissolution or Significant
//! Disposition of Assets.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        LiquidationOfAssets::definition(),
        PartII::definition(),
        DispositionOfAssets::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedn_part_i",
    form = "ScheduleN",
    part = "Part I",
    description = "Liquidation, termination or dissolution"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Officers or directors involved in a successor organization
    #[field(xpath = "/IRS990ScheduleN/DirectorOfSuccessorInd", line = "Part I Line 2a", max_length = 5)]
    pub director_of_successor_ind: Option<String>,

    /// Assets distributed in accordance with governing instruments
    #[field(xpath = "/IRS990ScheduleN/AssetsDistriGovInstrumentInd", line = "Part I Line 3", max_length = 5)]
    pub assets_distri_gov_instrument_ind: Option<String>,

    /// Required to notify attorney general
    #[field(xpath = "/IRS990ScheduleN/RequiredToNotifyAGInd", line = "Part I Line 4a", max_length = 5)]
    pub required_to_notify_ag_ind: Option<String>,

    /// All liabilities paid or settled
    #[field(xpath = "/IRS990ScheduleN/LiabilitiesPaidInd", line = "Part I Line 5", max_length = 5)]
    pub liabilities_paid_ind: Option<String>,

    /// Tax-exempt bonds outstanding
    #[field(xpath = "/IRS990ScheduleN/TaxExemptBondsInd", line = "Part I Line 6a", max_length = 5)]
    pub tax_exempt_bonds_ind: Option<String>,

    /// Officer, director, trustee or key employee is an employee of the successor
    #[field(xpath = "/IRS990ScheduleN/EmployeeOfSuccessorInd", line = "Part I Line 2b", max_length = 5)]
    pub employee_of_successor_ind: Option<String>,

    /// Officer, director, trustee or key employee is an owner of the successor
    #[field(xpath = "/IRS990ScheduleN/OwnerOfSuccessorInd", line = "Part I Line 2c", max_length = 5)]
    pub owner_of_successor_ind: Option<String>,

    /// Officer, director, trustee or key employee receives compensation from the successor
    #[field(xpath = "/IRS990ScheduleN/CompensationFromSuccessorInd", line = "Part I Line 2d", max_length = 5)]
    pub compensation_from_successor_ind: Option<String>,

    /// Attorney general or other state official notified
    #[field(xpath = "/IRS990ScheduleN/AttorneyGeneralNotifiedInd", line = "Part I Line 4b", max_length = 5)]
    pub attorney_general_notified_ind: Option<String>,

    /// Tax-exempt bond liabilities discharged or defeased
    #[field(
        xpath = "/IRS990ScheduleN/LiabilitiesPaidOrDischargedInd",
        line = "Part I Line 6b",
        max_length = 5
    )]
    pub liabilities_paid_or_discharged_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedn_lqdtnofasstsdtl",
    form = "ScheduleN",
    part = "Part I",
    description = "Assets distributed on liquidation",
    group = "/IRS990ScheduleN/LiquidationOfAssetsDetail",
    parent = "return_skedn_part_i"
)]
pub struct LiquidationOfAssets {
    pub object_id: String,
    pub ein: String,

    /// Description of asset
    #[field(xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/AssetsDistriOrExpnssPaidDesc", line = "Part I Line 1 Column a", long)]
    pub assets_distri_or_expnss_paid_desc: Option<String>,

    /// Date of distribution
    #[field(xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/DistributionDt", line = "Part I Line 1 Column b", date)]
    pub distribution_dt: Option<String>,

    /// Fair market value of asset
    #[field(xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/FairMarketValueOfAssetAmt", line = "Part I Line 1 Column c")]
    pub fair_market_value_of_asset_amt: Option<i64>,

    /// Method of determining fair market value
    #[field(xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/MethodOfFMVDeterminationTxt", line = "Part I Line 1 Column d")]
    pub method_of_fmv_determination_txt: Option<String>,

    /// Recipient EIN
    #[field(xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/EIN", line = "Part I Line 1 Column e", name = "RcpntEIN", max_length = 9)]
    pub recipient_ein: Option<String>,

    /// Recipient name
    #[field(xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/BusinessName/BusinessNameLine1Txt", line = "Part I Line 1 Column f")]
    pub business_name_line1_txt: Option<String>,

    /// Recipient street address
    #[field(
        xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/USAddress/AddressLine1Txt",
        line = "Part I Line 1 Column f"
    )]
    pub address_line_1_txt: Option<String>,

    /// Recipient city
    #[field(
        xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/USAddress/CityNm",
        line = "Part I Line 1 Column f",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// Recipient state
    #[field(
        xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/USAddress/StateAbbreviationCd",
        line = "Part I Line 1 Column f",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// Recipient zip code
    #[field(
        xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/USAddress/ZIPCd",
        line = "Part I Line 1 Column f",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// IRC section of recipient, if tax-exempt
    #[field(
        xpath = "/IRS990ScheduleN/LiquidationOfAssetsDetail/IRCSectionTxt",
        line = "Part I Line 1 Column g"
    )]
    pub irc_section_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedn_part_ii",
    form = "ScheduleN",
    part = "Part II",
    description = "Sale, exchange, disposition or other transfer of more than 25% of assets"
)]
pub struct PartII {
    pub object_id: String,
    pub ein: String,

    /// Officer, director, trustee or key employee is a director of the successor
    #[field(xpath = "/IRS990ScheduleN/DirectorOfSuccessor2Ind", line = "Part II Line 2a", max_length = 5)]
    pub director_of_successor_2_ind: Option<String>,

    /// Officer, director, trustee or key employee is an employee of the successor
    #[field(xpath = "/IRS990ScheduleN/EmployeeOfSuccessor2Ind", line = "Part II Line 2b", max_length = 5)]
    pub employee_of_successor_2_ind: Option<String>,

    /// Officer, director, trustee or key employee is an owner of the successor
    #[field(xpath = "/IRS990ScheduleN/OwnerOfSuccessor2Ind", line = "Part II Line 2c", max_length = 5)]
    pub owner_of_successor_2_ind: Option<String>,

    /// Officer, director, trustee or key employee receives compensation from the successor
    #[field(
        xpath = "/IRS990ScheduleN/CompensationFromSuccessor2Ind",
        line = "Part II Line 2d",
        max_length = 5
    )]
    pub compensation_from_successor_2_ind: Option<String>,

    /// Required to notify the attorney general or other state official
    #[field(xpath = "/IRS990ScheduleN/RequiredToNotifyAG2Ind", line = "Part II Line 3a", max_length = 5)]
    pub required_to_notify_ag_2_ind: Option<String>,

    /// Attorney general or other state official notified
    #[field(xpath = "/IRS990ScheduleN/AttorneyGeneralNotified2Ind", line = "Part II Line 3b", max_length = 5)]
    pub attorney_general_notified_2_ind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedn_dspstnofasstsdtl",
    form = "ScheduleN",
    part = "Part II",
    description = "Disposition of assets",
    group = "/IRS990ScheduleN/DispositionOfAssetsDetail",
    parent = "return_skedn_part_ii"
)]
pub struct DispositionOfAssets {
    pub object_id: String,
    pub ein: String,

    /// Description of asset or assets
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/AssetsDistriOrExpnssPaidDesc",
        line = "Part II Line 1 Column a",
        long
    )]
    pub assets_distri_or_expnss_paid_desc: Option<String>,

    /// Date of distribution
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/DistributionDt",
        line = "Part II Line 1 Column b",
        date
    )]
    pub distribution_dt: Option<String>,

    /// Fair market value of asset
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/FairMarketValueOfAssetAmt",
        line = "Part II Line 1 Column c"
    )]
    pub fair_market_value_of_asset_amt: Option<i64>,

    /// Method of determining FMV
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/MethodOfFMVDeterminationTxt",
        line = "Part II Line 1 Column d"
    )]
    pub method_of_fmv_determination_txt: Option<String>,

    /// EIN of recipient
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/EIN",
        line = "Part II Line 1 Column e",
        name = "RcpntEIN",
        max_length = 9
    )]
    pub ein_value: Option<String>,

    /// Name of recipient
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/BusinessName/BusinessNameLine1Txt",
        line = "Part II Line 1 Column f"
    )]
    pub business_name_line_1_txt: Option<String>,

    /// Recipient street address
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/USAddress/AddressLine1Txt",
        line = "Part II Line 1 Column f"
    )]
    pub address_line_1_txt: Option<String>,

    /// Recipient city
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/USAddress/CityNm",
        line = "Part II Line 1 Column f",
        max_length = 22
    )]
    pub city_nm: Option<String>,

    /// Recipient state
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/USAddress/StateAbbreviationCd",
        line = "Part II Line 1 Column f",
        max_length = 2
    )]
    pub state_abbreviation_cd: Option<String>,

    /// Recipient zip code
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/USAddress/ZIPCd",
        line = "Part II Line 1 Column f",
        max_length = 10
    )]
    pub zip_cd: Option<String>,

    /// IRC section of recipient, if tax-exempt
    #[field(
        xpath = "/IRS990ScheduleN/DispositionOfAssetsDetail/IRCSectionTxt",
        line = "Part II Line 1 Column g"
    )]
    pub irc_section_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedn_spplmntlinfrmtndtl",
    form = "ScheduleN",
    part = "Part III",
    description = "Supplemental information",
    group = "/IRS990ScheduleN/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleN/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part III"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleN/SupplementalInformationDetail/ExplanationTxt", line = "Part III", long)]
    pub explanation_txt: Option<String>,
}
