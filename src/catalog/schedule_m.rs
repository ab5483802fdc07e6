//! Schedule M: Noncash Contributions.

use irs990_macros::FormTable;
use serde::{Deserialize, Serialize};

use crate::schema::{FormTable as _, TableDefinition};

pub fn tables() -> Vec<&'static TableDefinition> {
    vec![
        PartI::definition(),
        OtherNonCashContri::definition(),
        SupplementalInformationDetail::definition(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedm_part_i",
    form = "ScheduleM",
    part = "Part I",
    description = "Types of property"
)]
pub struct PartI {
    pub object_id: String,
    pub ein: String,

    /// Art - works of art: contributions count
    #[field(xpath = "/IRS990ScheduleM/WorksOfArtGrp/ContributionCnt", line = "Part I Line 1 Column b")]
    pub works_of_art_contribution_cnt: Option<i32>,

    /// Art - works of art: revenue
    #[field(xpath = "/IRS990ScheduleM/WorksOfArtGrp/NoncashContributionsRptF990Amt", line = "Part I Line 1 Column c")]
    pub works_of_art_revenue_amt: Option<i64>,

    /// Art - works of art: method of determining revenue
    #[field(xpath = "/IRS990ScheduleM/WorksOfArtGrp/MethodOfDeterminingRevenuesTxt", line = "Part I Line 1 Column d")]
    pub works_of_art_method_txt: Option<String>,

    /// Books and publications: contributions count
    #[field(xpath = "/IRS990ScheduleM/BooksAndPublicationsGrp/ContributionCnt", line = "Part I Line 4 Column b")]
    pub books_contribution_cnt: Option<i32>,

    /// Books and publications: revenue
    #[field(xpath = "/IRS990ScheduleM/BooksAndPublicationsGrp/NoncashContributionsRptF990Amt", line = "Part I Line 4 Column c")]
    pub books_revenue_amt: Option<i64>,

    /// Clothing and household goods: contributions count
    #[field(xpath = "/IRS990ScheduleM/ClothingAndHouseholdGoodsGrp/ContributionCnt", line = "Part I Line 5 Column b")]
    pub clothing_contribution_cnt: Option<i32>,

    /// Clothing and household goods: revenue
    #[field(xpath = "/IRS990ScheduleM/ClothingAndHouseholdGoodsGrp/NoncashContributionsRptF990Amt", line = "Part I Line 5 Column c")]
    pub clothing_revenue_amt: Option<i64>,

    /// Securities - publicly traded: contributions count
    #[field(xpath = "/IRS990ScheduleM/SecuritiesPubliclyTradedGrp/ContributionCnt", line = "Part I Line 9 Column b")]
    pub securities_contribution_cnt: Option<i32>,

    /// Securities - publicly traded: revenue
    #[field(xpath = "/IRS990ScheduleM/SecuritiesPubliclyTradedGrp/NoncashContributionsRptF990Amt", line = "Part I Line 9 Column c")]
    pub securities_revenue_amt: Option<i64>,

    /// Number of Forms 8283 received
    #[field(xpath = "/IRS990ScheduleM/Form8283ReceivedCnt", line = "Part I Line 29")]
    pub form_8283_received_cnt: Option<i32>,

    /// Gift acceptance policy
    #[field(xpath = "/IRS990ScheduleM/AnyPropertyThatMustBeHeldInd", line = "Part I Line 30a", max_length = 5)]
    pub any_property_that_must_be_held_ind: Option<String>,

    /// Review process for non-standard contributions
    #[field(xpath = "/IRS990ScheduleM/ReviewProcessUnusualNCGiftsInd", line = "Part I Line 31", max_length = 5)]
    pub review_process_unusual_nc_gifts_ind: Option<String>,

    /// Third parties used to solicit or process noncash contributions
    #[field(xpath = "/IRS990ScheduleM/ThirdPartiesUsedInd", line = "Part I Line 32a", max_length = 5)]
    pub third_parties_used_ind: Option<String>,

    /// Art - works of art - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/WorksOfArtGrp/NonCashCheckboxInd",
        line = "Part I Line 1 Column a",
        max_length = 5
    )]
    pub works_of_art_non_cash_checkbox_ind: Option<String>,

    /// Art - historical treasures - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalTreasuresGrp/NonCashCheckboxInd",
        line = "Part I Line 2 Column a",
        max_length = 5
    )]
    pub historical_treasures_non_cash_checkbox_ind: Option<String>,

    /// Art - historical treasures - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalTreasuresGrp/ContributionCnt",
        line = "Part I Line 2 Column b"
    )]
    pub historical_treasures_contribution_cnt: Option<i32>,

    /// Art - historical treasures - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalTreasuresGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 2 Column c"
    )]
    pub historical_treasures_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Art - historical treasures - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalTreasuresGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 2 Column d"
    )]
    pub historical_treasures_method_of_determining_revenues_txt: Option<String>,

    /// Art - fractional interests - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/FractionalInterestsGrp/NonCashCheckboxInd",
        line = "Part I Line 3 Column a",
        max_length = 5
    )]
    pub fractional_interests_non_cash_checkbox_ind: Option<String>,

    /// Art - fractional interests - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/FractionalInterestsGrp/ContributionCnt",
        line = "Part I Line 3 Column b"
    )]
    pub fractional_interests_contribution_cnt: Option<i32>,

    /// Art - fractional interests - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/FractionalInterestsGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 3 Column c"
    )]
    pub fractional_interests_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Art - fractional interests - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/FractionalInterestsGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 3 Column d"
    )]
    pub fractional_interests_method_of_determining_revenues_txt: Option<String>,

    /// Books and publications - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/BooksAndPublicationsGrp/NonCashCheckboxInd",
        line = "Part I Line 4 Column a",
        max_length = 5
    )]
    pub books_and_publications_non_cash_checkbox_ind: Option<String>,

    /// Books and publications - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/BooksAndPublicationsGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 4 Column d"
    )]
    pub books_and_publications_method_of_determining_revenues_txt: Option<String>,

    /// Clothing and household goods - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/ClothingAndHouseholdGoodsGrp/NonCashCheckboxInd",
        line = "Part I Line 5 Column a",
        max_length = 5
    )]
    pub clothing_and_household_goods_non_cash_checkbox_ind: Option<String>,

    /// Clothing and household goods - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/ClothingAndHouseholdGoodsGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 5 Column d"
    )]
    pub clothing_and_household_goods_method_of_determining_revenues_txt: Option<String>,

    /// Cars and other vehicles - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/CarsAndOtherVehiclesGrp/NonCashCheckboxInd",
        line = "Part I Line 6 Column a",
        max_length = 5
    )]
    pub cars_and_other_vehicles_non_cash_checkbox_ind: Option<String>,

    /// Cars and other vehicles - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/CarsAndOtherVehiclesGrp/ContributionCnt",
        line = "Part I Line 6 Column b"
    )]
    pub cars_and_other_vehicles_contribution_cnt: Option<i32>,

    /// Cars and other vehicles - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/CarsAndOtherVehiclesGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 6 Column c"
    )]
    pub cars_and_other_vehicles_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Cars and other vehicles - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/CarsAndOtherVehiclesGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 6 Column d"
    )]
    pub cars_and_other_vehicles_method_of_determining_revenues_txt: Option<String>,

    /// Boats and planes - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/BoatsAndPlanesGrp/NonCashCheckboxInd",
        line = "Part I Line 7 Column a",
        max_length = 5
    )]
    pub boats_and_planes_non_cash_checkbox_ind: Option<String>,

    /// Boats and planes - number of contributions
    #[field(xpath = "/IRS990ScheduleM/BoatsAndPlanesGrp/ContributionCnt", line = "Part I Line 7 Column b")]
    pub boats_and_planes_contribution_cnt: Option<i32>,

    /// Boats and planes - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/BoatsAndPlanesGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 7 Column c"
    )]
    pub boats_and_planes_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Boats and planes - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/BoatsAndPlanesGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 7 Column d"
    )]
    pub boats_and_planes_method_of_determining_revenues_txt: Option<String>,

    /// Intellectual property - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/IntellectualPropertyGrp/NonCashCheckboxInd",
        line = "Part I Line 8 Column a",
        max_length = 5
    )]
    pub intellectual_property_non_cash_checkbox_ind: Option<String>,

    /// Intellectual property - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/IntellectualPropertyGrp/ContributionCnt",
        line = "Part I Line 8 Column b"
    )]
    pub intellectual_property_contribution_cnt: Option<i32>,

    /// Intellectual property - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/IntellectualPropertyGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 8 Column c"
    )]
    pub intellectual_property_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Intellectual property - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/IntellectualPropertyGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 8 Column d"
    )]
    pub intellectual_property_method_of_determining_revenues_txt: Option<String>,

    /// Securities - publicly traded - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesPubliclyTradedGrp/NonCashCheckboxInd",
        line = "Part I Line 9 Column a",
        max_length = 5
    )]
    pub securities_publicly_traded_non_cash_checkbox_ind: Option<String>,

    /// Securities - publicly traded - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesPubliclyTradedGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 9 Column d"
    )]
    pub securities_publicly_traded_method_of_determining_revenues_txt: Option<String>,

    /// Securities - closely held stock - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesCloselyHeldStockGrp/NonCashCheckboxInd",
        line = "Part I Line 10 Column a",
        max_length = 5
    )]
    pub securities_closely_held_stock_non_cash_checkbox_ind: Option<String>,

    /// Securities - closely held stock - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesCloselyHeldStockGrp/ContributionCnt",
        line = "Part I Line 10 Column b"
    )]
    pub securities_closely_held_stock_contribution_cnt: Option<i32>,

    /// Securities - closely held stock - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesCloselyHeldStockGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 10 Column c"
    )]
    pub securities_closely_held_stock_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Securities - closely held stock - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesCloselyHeldStockGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 10 Column d"
    )]
    pub securities_closely_held_stock_method_of_determining_revenues_txt: Option<String>,

    /// Securities - partnership, LLC or trust interests - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesPrtnrshpTrustIntsGrp/NonCashCheckboxInd",
        line = "Part I Line 11 Column a",
        max_length = 5
    )]
    pub securities_prtnrshp_trust_ints_non_cash_checkbox_ind: Option<String>,

    /// Securities - partnership, LLC or trust interests - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesPrtnrshpTrustIntsGrp/ContributionCnt",
        line = "Part I Line 11 Column b"
    )]
    pub securities_prtnrshp_trust_ints_contribution_cnt: Option<i32>,

    /// Securities - partnership, LLC or trust interests - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesPrtnrshpTrustIntsGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 11 Column c"
    )]
    pub securities_prtnrshp_trust_ints_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Securities - partnership, LLC or trust interests - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesPrtnrshpTrustIntsGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 11 Column d"
    )]
    pub securities_prtnrshp_trust_ints_method_of_determining_revenues_txt: Option<String>,

    /// Securities - miscellaneous - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesMiscellaneousGrp/NonCashCheckboxInd",
        line = "Part I Line 12 Column a",
        max_length = 5
    )]
    pub securities_miscellaneous_non_cash_checkbox_ind: Option<String>,

    /// Securities - miscellaneous - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesMiscellaneousGrp/ContributionCnt",
        line = "Part I Line 12 Column b"
    )]
    pub securities_miscellaneous_contribution_cnt: Option<i32>,

    /// Securities - miscellaneous - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesMiscellaneousGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 12 Column c"
    )]
    pub securities_miscellaneous_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Securities - miscellaneous - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/SecuritiesMiscellaneousGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 12 Column d"
    )]
    pub securities_miscellaneous_method_of_determining_revenues_txt: Option<String>,

    /// Qualified conservation contribution - historic structures - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContriHistStructGrp/NonCashCheckboxInd",
        line = "Part I Line 13 Column a",
        max_length = 5
    )]
    pub qualified_contri_hist_struct_non_cash_checkbox_ind: Option<String>,

    /// Qualified conservation contribution - historic structures - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContriHistStructGrp/ContributionCnt",
        line = "Part I Line 13 Column b"
    )]
    pub qualified_contri_hist_struct_contribution_cnt: Option<i32>,

    /// Qualified conservation contribution - historic structures - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContriHistStructGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 13 Column c"
    )]
    pub qualified_contri_hist_struct_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Qualified conservation contribution - historic structures - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContriHistStructGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 13 Column d"
    )]
    pub qualified_contri_hist_struct_method_of_determining_revenues_txt: Option<String>,

    /// Qualified conservation contribution - other - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContribOtherGrp/NonCashCheckboxInd",
        line = "Part I Line 14 Column a",
        max_length = 5
    )]
    pub qualified_contrib_other_non_cash_checkbox_ind: Option<String>,

    /// Qualified conservation contribution - other - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContribOtherGrp/ContributionCnt",
        line = "Part I Line 14 Column b"
    )]
    pub qualified_contrib_other_contribution_cnt: Option<i32>,

    /// Qualified conservation contribution - other - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContribOtherGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 14 Column c"
    )]
    pub qualified_contrib_other_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Qualified conservation contribution - other - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/QualifiedContribOtherGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 14 Column d"
    )]
    pub qualified_contrib_other_method_of_determining_revenues_txt: Option<String>,

    /// Real estate - residential - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateResidentialGrp/NonCashCheckboxInd",
        line = "Part I Line 15 Column a",
        max_length = 5
    )]
    pub real_estate_residential_non_cash_checkbox_ind: Option<String>,

    /// Real estate - residential - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateResidentialGrp/ContributionCnt",
        line = "Part I Line 15 Column b"
    )]
    pub real_estate_residential_contribution_cnt: Option<i32>,

    /// Real estate - residential - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateResidentialGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 15 Column c"
    )]
    pub real_estate_residential_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Real estate - residential - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateResidentialGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 15 Column d"
    )]
    pub real_estate_residential_method_of_determining_revenues_txt: Option<String>,

    /// Real estate - commercial - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateCommercialGrp/NonCashCheckboxInd",
        line = "Part I Line 16 Column a",
        max_length = 5
    )]
    pub real_estate_commercial_non_cash_checkbox_ind: Option<String>,

    /// Real estate - commercial - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateCommercialGrp/ContributionCnt",
        line = "Part I Line 16 Column b"
    )]
    pub real_estate_commercial_contribution_cnt: Option<i32>,

    /// Real estate - commercial - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateCommercialGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 16 Column c"
    )]
    pub real_estate_commercial_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Real estate - commercial - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateCommercialGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 16 Column d"
    )]
    pub real_estate_commercial_method_of_determining_revenues_txt: Option<String>,

    /// Real estate - other - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateOtherGrp/NonCashCheckboxInd",
        line = "Part I Line 17 Column a",
        max_length = 5
    )]
    pub real_estate_other_non_cash_checkbox_ind: Option<String>,

    /// Real estate - other - number of contributions
    #[field(xpath = "/IRS990ScheduleM/RealEstateOtherGrp/ContributionCnt", line = "Part I Line 17 Column b")]
    pub real_estate_other_contribution_cnt: Option<i32>,

    /// Real estate - other - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateOtherGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 17 Column c"
    )]
    pub real_estate_other_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Real estate - other - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/RealEstateOtherGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 17 Column d"
    )]
    pub real_estate_other_method_of_determining_revenues_txt: Option<String>,

    /// Collectibles - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/CollectiblesGrp/NonCashCheckboxInd",
        line = "Part I Line 18 Column a",
        max_length = 5
    )]
    pub collectibles_non_cash_checkbox_ind: Option<String>,

    /// Collectibles - number of contributions
    #[field(xpath = "/IRS990ScheduleM/CollectiblesGrp/ContributionCnt", line = "Part I Line 18 Column b")]
    pub collectibles_contribution_cnt: Option<i32>,

    /// Collectibles - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/CollectiblesGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 18 Column c"
    )]
    pub collectibles_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Collectibles - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/CollectiblesGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 18 Column d"
    )]
    pub collectibles_method_of_determining_revenues_txt: Option<String>,

    /// Food inventory - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/FoodInventoryGrp/NonCashCheckboxInd",
        line = "Part I Line 19 Column a",
        max_length = 5
    )]
    pub food_inventory_non_cash_checkbox_ind: Option<String>,

    /// Food inventory - number of contributions
    #[field(xpath = "/IRS990ScheduleM/FoodInventoryGrp/ContributionCnt", line = "Part I Line 19 Column b")]
    pub food_inventory_contribution_cnt: Option<i32>,

    /// Food inventory - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/FoodInventoryGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 19 Column c"
    )]
    pub food_inventory_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Food inventory - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/FoodInventoryGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 19 Column d"
    )]
    pub food_inventory_method_of_determining_revenues_txt: Option<String>,

    /// Drugs and medical supplies - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/DrugsAndMedicalSuppliesGrp/NonCashCheckboxInd",
        line = "Part I Line 20 Column a",
        max_length = 5
    )]
    pub drugs_and_medical_supplies_non_cash_checkbox_ind: Option<String>,

    /// Drugs and medical supplies - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/DrugsAndMedicalSuppliesGrp/ContributionCnt",
        line = "Part I Line 20 Column b"
    )]
    pub drugs_and_medical_supplies_contribution_cnt: Option<i32>,

    /// Drugs and medical supplies - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/DrugsAndMedicalSuppliesGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 20 Column c"
    )]
    pub drugs_and_medical_supplies_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Drugs and medical supplies - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/DrugsAndMedicalSuppliesGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 20 Column d"
    )]
    pub drugs_and_medical_supplies_method_of_determining_revenues_txt: Option<String>,

    /// Taxidermy - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/TaxidermyGrp/NonCashCheckboxInd",
        line = "Part I Line 21 Column a",
        max_length = 5
    )]
    pub taxidermy_non_cash_checkbox_ind: Option<String>,

    /// Taxidermy - number of contributions
    #[field(xpath = "/IRS990ScheduleM/TaxidermyGrp/ContributionCnt", line = "Part I Line 21 Column b")]
    pub taxidermy_contribution_cnt: Option<i32>,

    /// Taxidermy - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/TaxidermyGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 21 Column c"
    )]
    pub taxidermy_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Taxidermy - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/TaxidermyGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 21 Column d"
    )]
    pub taxidermy_method_of_determining_revenues_txt: Option<String>,

    /// Historical artifacts - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalArtifactsGrp/NonCashCheckboxInd",
        line = "Part I Line 22 Column a",
        max_length = 5
    )]
    pub historical_artifacts_non_cash_checkbox_ind: Option<String>,

    /// Historical artifacts - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalArtifactsGrp/ContributionCnt",
        line = "Part I Line 22 Column b"
    )]
    pub historical_artifacts_contribution_cnt: Option<i32>,

    /// Historical artifacts - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalArtifactsGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 22 Column c"
    )]
    pub historical_artifacts_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Historical artifacts - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/HistoricalArtifactsGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 22 Column d"
    )]
    pub historical_artifacts_method_of_determining_revenues_txt: Option<String>,

    /// Scientific specimens - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/ScientificSpecimensGrp/NonCashCheckboxInd",
        line = "Part I Line 23 Column a",
        max_length = 5
    )]
    pub scientific_specimens_non_cash_checkbox_ind: Option<String>,

    /// Scientific specimens - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/ScientificSpecimensGrp/ContributionCnt",
        line = "Part I Line 23 Column b"
    )]
    pub scientific_specimens_contribution_cnt: Option<i32>,

    /// Scientific specimens - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/ScientificSpecimensGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 23 Column c"
    )]
    pub scientific_specimens_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Scientific specimens - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/ScientificSpecimensGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 23 Column d"
    )]
    pub scientific_specimens_method_of_determining_revenues_txt: Option<String>,

    /// Archeological artifacts - noncash contribution reported
    #[field(
        xpath = "/IRS990ScheduleM/ArcheologicalArtifactsGrp/NonCashCheckboxInd",
        line = "Part I Line 24 Column a",
        max_length = 5
    )]
    pub archeological_artifacts_non_cash_checkbox_ind: Option<String>,

    /// Archeological artifacts - number of contributions
    #[field(
        xpath = "/IRS990ScheduleM/ArcheologicalArtifactsGrp/ContributionCnt",
        line = "Part I Line 24 Column b"
    )]
    pub archeological_artifacts_contribution_cnt: Option<i32>,

    /// Archeological artifacts - noncash contribution amounts reported on Form 990
    #[field(
        xpath = "/IRS990ScheduleM/ArcheologicalArtifactsGrp/NoncashContributionsRptF990Amt",
        line = "Part I Line 24 Column c"
    )]
    pub archeological_artifacts_noncash_contributions_rpt_f_990_amt: Option<i64>,

    /// Archeological artifacts - method of determining noncash contribution amounts
    #[field(
        xpath = "/IRS990ScheduleM/ArcheologicalArtifactsGrp/MethodOfDeterminingRevenuesTxt",
        line = "Part I Line 24 Column d"
    )]
    pub archeological_artifacts_method_of_determining_revenues_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedm_othrnncshcntrtbl",
    form = "ScheduleM",
    part = "Part I",
    description = "Other noncash contributions",
    group = "/IRS990ScheduleM/OtherNonCashContriTable",
    parent = "return_skedm_part_i"
)]
pub struct OtherNonCashContri {
    pub object_id: String,
    pub ein: String,

    /// Type of property
    #[field(xpath = "/IRS990ScheduleM/OtherNonCashContriTable/OtherNonCashContriTypeTxt", line = "Part I Lines 25-28 Column a")]
    pub other_non_cash_contri_type_txt: Option<String>,

    /// Number of contributions
    #[field(xpath = "/IRS990ScheduleM/OtherNonCashContriTable/ContributionCnt", line = "Part I Lines 25-28 Column b")]
    pub contribution_cnt: Option<i32>,

    /// Revenue reported on Form 990
    #[field(xpath = "/IRS990ScheduleM/OtherNonCashContriTable/NoncashContributionsRptF990Amt", line = "Part I Lines 25-28 Column c")]
    pub noncash_contributions_rpt_f990_amt: Option<i64>,

    /// Method of determining revenue
    #[field(xpath = "/IRS990ScheduleM/OtherNonCashContriTable/MethodOfDeterminingRevenuesTxt", line = "Part I Lines 25-28 Column d")]
    pub method_of_determining_revenues_txt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FormTable)]
#[table(
    name = "return_skedm_spplmntlinfrmtndtl",
    form = "ScheduleM",
    part = "Part II",
    description = "Supplemental information",
    group = "/IRS990ScheduleM/SupplementalInformationDetail"
)]
pub struct SupplementalInformationDetail {
    pub object_id: String,
    pub ein: String,

    /// Return reference
    #[field(
        xpath = "/IRS990ScheduleM/SupplementalInformationDetail/FormAndLineReferenceDesc",
        line = "Part II"
    )]
    pub form_and_line_reference_desc: Option<String>,

    /// Explanation
    #[field(xpath = "/IRS990ScheduleM/SupplementalInformationDetail/ExplanationTxt", line = "Part II", long)]
    pub explanation_txt: Option<String>,
}
