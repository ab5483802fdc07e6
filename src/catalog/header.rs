//! Return header: the filing entity every other table belongs to.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![ReturnHeader::definition()]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_header",
    form = "ReturnHeader",
    description = "Filing entity: filer, tax period, preparer and signing officer"
)]
pub struct ReturnHeader {
    pub object_id: String,
    pub ein: String,

    /// Timestamp the return was created
    #[field(xpath = "/ReturnHeader/ReturnTs", alias = "/ReturnHeader/Timestamp")]
    pub return_ts: Option<String>,

    /// Tax period end date
    #[field(xpath = "/ReturnHeader/TaxPeriodEndDt", date, alias = "/ReturnHeader/TaxPeriodEndDate")]
    pub tax_period_end_dt: Option<String>,

    /// Tax period begin date
    #[field(xpath = "/ReturnHeader/TaxPeriodBeginDt", date, alias = "/ReturnHeader/TaxPeriodBeginDate")]
    pub tax_period_begin_dt: Option<String>,

    /// Return type: 990, 990EZ, 990PF
    #[field(xpath = "/ReturnHeader/ReturnTypeCd", max_length = 10, alias = "/ReturnHeader/ReturnType")]
    pub return_type_cd: Option<String>,

    /// Tax year
    #[field(xpath = "/ReturnHeader/TaxYr", alias = "/ReturnHeader/TaxYear")]
    pub tax_yr: Option<i32>,

    /// Filer EIN as reported in the header
    #[field(xpath = "/ReturnHeader/Filer/EIN", max_length = 15)]
    pub filer_ein: Option<String>,

    /// Filer name, line 1
    #[field(
        xpath = "/ReturnHeader/Filer/BusinessName/BusinessNameLine1Txt",
        alias = "/ReturnHeader/Filer/Name/BusinessNameLine1"
    )]
    pub filer_business_name_line1_txt: Option<String>,

    /// Filer name, line 2
    #[field(
        xpath = "/ReturnHeader/Filer/BusinessName/BusinessNameLine2Txt",
        alias = "/ReturnHeader/Filer/Name/BusinessNameLine2"
    )]
    pub filer_business_name_line2_txt: Option<String>,

    /// Name control
    #[field(
        xpath = "/ReturnHeader/Filer/BusinessNameControlTxt",
        max_length = 4,
        alias = "/ReturnHeader/Filer/NameControl"
    )]
    pub filer_business_name_control_txt: Option<String>,

    /// Filer phone number
    #[field(xpath = "/ReturnHeader/Filer/PhoneNum", max_length = 20, alias = "/ReturnHeader/Filer/Phone")]
    pub filer_phone_num: Option<String>,

    /// Filer street address
    #[field(
        xpath = "/ReturnHeader/Filer/USAddress/AddressLine1Txt",
        max_length = 35,
        alias = "/ReturnHeader/Filer/USAddress/AddressLine1"
    )]
    pub filer_address_line1_txt: Option<String>,

    /// Filer city
    #[field(
        xpath = "/ReturnHeader/Filer/USAddress/CityNm",
        max_length = 22,
        alias = "/ReturnHeader/Filer/USAddress/City"
    )]
    pub filer_city_nm: Option<String>,

    /// Filer state
    #[field(
        xpath = "/ReturnHeader/Filer/USAddress/StateAbbreviationCd",
        max_length = 2,
        alias = "/ReturnHeader/Filer/USAddress/State"
    )]
    pub filer_state_abbreviation_cd: Option<String>,

    /// Filer ZIP code
    #[field(
        xpath = "/ReturnHeader/Filer/USAddress/ZIPCd",
        max_length = 10,
        alias = "/ReturnHeader/Filer/USAddress/ZIPCode"
    )]
    pub filer_zip_cd: Option<String>,

    /// Filer foreign city
    #[field(xpath = "/ReturnHeader/Filer/ForeignAddress/CityNm", max_length = 50)]
    pub filer_foreign_city_nm: Option<String>,

    /// Filer foreign country
    #[field(xpath = "/ReturnHeader/Filer/ForeignAddress/CountryCd", max_length = 2)]
    pub filer_foreign_country_cd: Option<String>,

    /// Signing officer name
    #[field(xpath = "/ReturnHeader/BusinessOfficerGrp/PersonNm", alias = "/ReturnHeader/Officer/Name")]
    pub officer_person_nm: Option<String>,

    /// Signing officer title
    #[field(xpath = "/ReturnHeader/BusinessOfficerGrp/PersonTitleTxt", alias = "/ReturnHeader/Officer/Title")]
    pub officer_person_title_txt: Option<String>,

    /// Signing officer phone
    #[field(xpath = "/ReturnHeader/BusinessOfficerGrp/PhoneNum", max_length = 20)]
    pub officer_phone_num: Option<String>,

    /// Date signed
    #[field(
        xpath = "/ReturnHeader/BusinessOfficerGrp/SignatureDt",
        date,
        alias = "/ReturnHeader/Officer/DateSigned"
    )]
    pub officer_signature_dt: Option<String>,

    /// Preparer firm name
    #[field(
        xpath = "/ReturnHeader/PreparerFirmGrp/PreparerFirmName/BusinessNameLine1Txt",
        alias = "/ReturnHeader/PreparerFirm/PreparerFirmBusinessName/BusinessNameLine1"
    )]
    pub preparer_firm_name_txt: Option<String>,

    /// Preparer firm EIN
    #[field(xpath = "/ReturnHeader/PreparerFirmGrp/PreparerFirmEIN", max_length = 9)]
    pub preparer_firm_ein: Option<String>,

    /// Preparer name
    #[field(xpath = "/ReturnHeader/PreparerPersonGrp/PreparerPersonNm", alias = "/ReturnHeader/Preparer/Name")]
    pub preparer_person_nm: Option<String>,

    /// Preparer PTIN
    #[field(xpath = "/ReturnHeader/PreparerPersonGrp/PTIN", max_length = 9, alias = "/ReturnHeader/Preparer/PTIN")]
    pub preparer_ptin: Option<String>,

    /// Date prepared
    #[field(xpath = "/ReturnHeader/PreparerPersonGrp/PreparationDt", date)]
    pub preparation_dt: Option<String>,

    /// Software ID
    #[field(xpath = "/ReturnHeader/SoftwareId", max_length = 8, alias = "/ReturnHeader/SoftwareID")]
    pub software_id: Option<String>,

    /// Software version
    #[field(xpath = "/ReturnHeader/SoftwareVersionNum", max_length = 20, alias = "/ReturnHeader/SoftwareVersion")]
    pub software_version_num: Option<String>,

    /// Filer address, second line
    #[field(xpath = "/ReturnHeader/Filer/USAddress/AddressLine2Txt")]
    pub filer_address_line2_txt: Option<String>,

    /// Filer foreign address
    #[field(xpath = "/ReturnHeader/Filer/ForeignAddress/AddressLine1Txt")]
    pub filer_foreign_address_line1_txt: Option<String>,

    /// Filer foreign province or state
    #[field(xpath = "/ReturnHeader/Filer/ForeignAddress/ProvinceOrStateNm")]
    pub filer_foreign_province_nm: Option<String>,

    /// Filer foreign postal code
    #[field(xpath = "/ReturnHeader/Filer/ForeignAddress/ForeignPostalCd")]
    pub filer_foreign_postal_cd: Option<String>,

    /// In care of name
    #[field(xpath = "/ReturnHeader/Filer/InCareOfNm")]
    pub filer_in_care_of_nm: Option<String>,

    /// Preparer firm address
    #[field(xpath = "/ReturnHeader/PreparerFirmGrp/PreparerUSAddress/AddressLine1Txt")]
    pub preparer_firm_address_line1_txt: Option<String>,

    /// Preparer firm city
    #[field(xpath = "/ReturnHeader/PreparerFirmGrp/PreparerUSAddress/CityNm", max_length = 22)]
    pub preparer_firm_city_nm: Option<String>,

    /// Preparer firm state
    #[field(xpath = "/ReturnHeader/PreparerFirmGrp/PreparerUSAddress/StateAbbreviationCd", max_length = 2)]
    pub preparer_firm_state_cd: Option<String>,

    /// Preparer firm ZIP code
    #[field(xpath = "/ReturnHeader/PreparerFirmGrp/PreparerUSAddress/ZIPCd", max_length = 10)]
    pub preparer_firm_zip_cd: Option<String>,

    /// Preparer phone number
    #[field(xpath = "/ReturnHeader/PreparerPersonGrp/PhoneNum", max_length = 20)]
    pub preparer_phone_num: Option<String>,

    /// Preparer is self-employed
    #[field(xpath = "/ReturnHeader/PreparerPersonGrp/SelfEmployedInd", max_length = 5)]
    pub preparer_self_employed_ind: Option<String>,

    /// More than one software package used
    #[field(xpath = "/ReturnHeader/MultSoftwarePackagesUsedInd", max_length = 5)]
    pub mult_software_packages_used_ind: Option<String>,

    /// Who entered the signature PIN
    #[field(xpath = "/ReturnHeader/PINEnteredByCd", max_length = 15)]
    pub pin_entered_by_cd: Option<String>,

    /// Signature option
    #[field(xpath = "/ReturnHeader/SignatureOptionCd", max_length = 40)]
    pub signature_option_cd: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_column_names() {
        let table = ReturnHeader::definition();
        assert!(table.has_column("RtrnTs"));
        assert!(table.has_column("TxPrdEndDt"));
        assert!(table.has_column("Flr_EIN"));
        assert!(table.has_column("Flr_BsnssNm_BsnssNmLn1Txt"));
        assert!(table.has_column("BsnssOffcr_PrsnNm"));
        assert!(!table.is_repeating());
    }
}
