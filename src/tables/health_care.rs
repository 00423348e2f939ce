//! Health-care fee table by exact age
//!
//! Annual fees in VND. Children's comprehensive cover is unisex; from age 18
//! the comprehensive packages are priced by gender.

use crate::params::Gender;

/// Fee cell: either one fee for everyone or a per-gender pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthFee {
    Flat(f64),
    ByGender { male: f64, female: f64 },
}

impl HealthFee {
    /// Resolve the cell for a gender; per-gender cells have no entry for `Other`
    pub fn for_gender(&self, gender: Gender) -> Option<f64> {
        match (self, gender) {
            (HealthFee::Flat(fee), _) => Some(*fee),
            (HealthFee::ByGender { male, .. }, Gender::Male) => Some(*male),
            (HealthFee::ByGender { female, .. }, Gender::Female) => Some(*female),
            (HealthFee::ByGender { .. }, Gender::Other) => None,
        }
    }
}

/// Column of the health-care table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthCareKey {
    CoBan,
    NangCao,
    ToanDien1,
    ToanDien2,
}

impl HealthCareKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCareKey::CoBan => "co_ban",
            HealthCareKey::NangCao => "nang_cao",
            HealthCareKey::ToanDien1 => "toan_dien_1",
            HealthCareKey::ToanDien2 => "toan_dien_2",
        }
    }
}

/// Fees for one age
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthCareRow {
    pub age: u32,
    pub co_ban: f64,
    pub nang_cao: f64,
    pub toan_dien_1: HealthFee,
    pub toan_dien_2: HealthFee,
}

impl HealthCareRow {
    pub fn fee(&self, key: HealthCareKey) -> HealthFee {
        match key {
            HealthCareKey::CoBan => HealthFee::Flat(self.co_ban),
            HealthCareKey::NangCao => HealthFee::Flat(self.nang_cao),
            HealthCareKey::ToanDien1 => self.toan_dien_1,
            HealthCareKey::ToanDien2 => self.toan_dien_2,
        }
    }
}

use HealthFee::{ByGender, Flat};

static HEALTH_CARE_FEES: &[HealthCareRow] = &[
    HealthCareRow { age: 0, co_ban: 1_452_000.0, nang_cao: 2_396_000.0, toan_dien_1: Flat(3_485_000.0), toan_dien_2: Flat(4_501_000.0) },
    HealthCareRow { age: 1, co_ban: 1_404_000.0, nang_cao: 2_317_000.0, toan_dien_1: Flat(3_370_000.0), toan_dien_2: Flat(4_352_000.0) },
    HealthCareRow { age: 2, co_ban: 1_356_000.0, nang_cao: 2_237_000.0, toan_dien_1: Flat(3_254_000.0), toan_dien_2: Flat(4_204_000.0) },
    HealthCareRow { age: 3, co_ban: 1_308_000.0, nang_cao: 2_158_000.0, toan_dien_1: Flat(3_139_000.0), toan_dien_2: Flat(4_055_000.0) },
    HealthCareRow { age: 4, co_ban: 1_260_000.0, nang_cao: 2_079_000.0, toan_dien_1: Flat(3_024_000.0), toan_dien_2: Flat(3_906_000.0) },
    HealthCareRow { age: 5, co_ban: 1_212_000.0, nang_cao: 2_000_000.0, toan_dien_1: Flat(2_909_000.0), toan_dien_2: Flat(3_757_000.0) },
    HealthCareRow { age: 6, co_ban: 1_164_000.0, nang_cao: 1_921_000.0, toan_dien_1: Flat(2_794_000.0), toan_dien_2: Flat(3_608_000.0) },
    HealthCareRow { age: 7, co_ban: 1_116_000.0, nang_cao: 1_841_000.0, toan_dien_1: Flat(2_678_000.0), toan_dien_2: Flat(3_460_000.0) },
    HealthCareRow { age: 8, co_ban: 1_068_000.0, nang_cao: 1_762_000.0, toan_dien_1: Flat(2_563_000.0), toan_dien_2: Flat(3_311_000.0) },
    HealthCareRow { age: 9, co_ban: 1_020_000.0, nang_cao: 1_683_000.0, toan_dien_1: Flat(2_448_000.0), toan_dien_2: Flat(3_162_000.0) },
    HealthCareRow { age: 10, co_ban: 972_000.0, nang_cao: 1_604_000.0, toan_dien_1: Flat(2_333_000.0), toan_dien_2: Flat(3_013_000.0) },
    HealthCareRow { age: 11, co_ban: 924_000.0, nang_cao: 1_525_000.0, toan_dien_1: Flat(2_218_000.0), toan_dien_2: Flat(2_864_000.0) },
    HealthCareRow { age: 12, co_ban: 900_000.0, nang_cao: 1_485_000.0, toan_dien_1: Flat(2_160_000.0), toan_dien_2: Flat(2_790_000.0) },
    HealthCareRow { age: 13, co_ban: 900_000.0, nang_cao: 1_485_000.0, toan_dien_1: Flat(2_160_000.0), toan_dien_2: Flat(2_790_000.0) },
    HealthCareRow { age: 14, co_ban: 900_000.0, nang_cao: 1_485_000.0, toan_dien_1: Flat(2_160_000.0), toan_dien_2: Flat(2_790_000.0) },
    HealthCareRow { age: 15, co_ban: 900_000.0, nang_cao: 1_485_000.0, toan_dien_1: Flat(2_160_000.0), toan_dien_2: Flat(2_790_000.0) },
    HealthCareRow { age: 16, co_ban: 900_000.0, nang_cao: 1_485_000.0, toan_dien_1: Flat(2_160_000.0), toan_dien_2: Flat(2_790_000.0) },
    HealthCareRow { age: 17, co_ban: 900_000.0, nang_cao: 1_485_000.0, toan_dien_1: Flat(2_160_000.0), toan_dien_2: Flat(2_790_000.0) },
    HealthCareRow { age: 18, co_ban: 960_000.0, nang_cao: 1_584_000.0, toan_dien_1: ByGender { male: 2_304_000.0, female: 2_580_000.0 }, toan_dien_2: ByGender { male: 2_976_000.0, female: 3_333_000.0 } },
    HealthCareRow { age: 19, co_ban: 972_000.0, nang_cao: 1_604_000.0, toan_dien_1: ByGender { male: 2_333_000.0, female: 2_613_000.0 }, toan_dien_2: ByGender { male: 3_013_000.0, female: 3_375_000.0 } },
    HealthCareRow { age: 20, co_ban: 984_000.0, nang_cao: 1_624_000.0, toan_dien_1: ByGender { male: 2_362_000.0, female: 2_645_000.0 }, toan_dien_2: ByGender { male: 3_050_000.0, female: 3_416_000.0 } },
    HealthCareRow { age: 21, co_ban: 996_000.0, nang_cao: 1_643_000.0, toan_dien_1: ByGender { male: 2_390_000.0, female: 2_677_000.0 }, toan_dien_2: ByGender { male: 3_088_000.0, female: 3_459_000.0 } },
    HealthCareRow { age: 22, co_ban: 1_008_000.0, nang_cao: 1_663_000.0, toan_dien_1: ByGender { male: 2_419_000.0, female: 2_709_000.0 }, toan_dien_2: ByGender { male: 3_125_000.0, female: 3_500_000.0 } },
    HealthCareRow { age: 23, co_ban: 1_020_000.0, nang_cao: 1_683_000.0, toan_dien_1: ByGender { male: 2_448_000.0, female: 2_742_000.0 }, toan_dien_2: ByGender { male: 3_162_000.0, female: 3_541_000.0 } },
    HealthCareRow { age: 24, co_ban: 1_032_000.0, nang_cao: 1_703_000.0, toan_dien_1: ByGender { male: 2_477_000.0, female: 2_774_000.0 }, toan_dien_2: ByGender { male: 3_199_000.0, female: 3_583_000.0 } },
    HealthCareRow { age: 25, co_ban: 1_044_000.0, nang_cao: 1_723_000.0, toan_dien_1: ByGender { male: 2_506_000.0, female: 2_807_000.0 }, toan_dien_2: ByGender { male: 3_236_000.0, female: 3_624_000.0 } },
    HealthCareRow { age: 26, co_ban: 1_056_000.0, nang_cao: 1_742_000.0, toan_dien_1: ByGender { male: 2_534_000.0, female: 2_838_000.0 }, toan_dien_2: ByGender { male: 3_274_000.0, female: 3_667_000.0 } },
    HealthCareRow { age: 27, co_ban: 1_068_000.0, nang_cao: 1_762_000.0, toan_dien_1: ByGender { male: 2_563_000.0, female: 2_871_000.0 }, toan_dien_2: ByGender { male: 3_311_000.0, female: 3_708_000.0 } },
    HealthCareRow { age: 28, co_ban: 1_080_000.0, nang_cao: 1_782_000.0, toan_dien_1: ByGender { male: 2_592_000.0, female: 2_903_000.0 }, toan_dien_2: ByGender { male: 3_348_000.0, female: 3_750_000.0 } },
    HealthCareRow { age: 29, co_ban: 1_092_000.0, nang_cao: 1_802_000.0, toan_dien_1: ByGender { male: 2_621_000.0, female: 2_936_000.0 }, toan_dien_2: ByGender { male: 3_385_000.0, female: 3_791_000.0 } },
    HealthCareRow { age: 30, co_ban: 1_104_000.0, nang_cao: 1_822_000.0, toan_dien_1: ByGender { male: 2_650_000.0, female: 2_968_000.0 }, toan_dien_2: ByGender { male: 3_422_000.0, female: 3_833_000.0 } },
    HealthCareRow { age: 31, co_ban: 1_116_000.0, nang_cao: 1_841_000.0, toan_dien_1: ByGender { male: 2_678_000.0, female: 2_999_000.0 }, toan_dien_2: ByGender { male: 3_460_000.0, female: 3_875_000.0 } },
    HealthCareRow { age: 32, co_ban: 1_128_000.0, nang_cao: 1_861_000.0, toan_dien_1: ByGender { male: 2_707_000.0, female: 3_032_000.0 }, toan_dien_2: ByGender { male: 3_497_000.0, female: 3_917_000.0 } },
    HealthCareRow { age: 33, co_ban: 1_140_000.0, nang_cao: 1_881_000.0, toan_dien_1: ByGender { male: 2_736_000.0, female: 3_064_000.0 }, toan_dien_2: ByGender { male: 3_534_000.0, female: 3_958_000.0 } },
    HealthCareRow { age: 34, co_ban: 1_152_000.0, nang_cao: 1_901_000.0, toan_dien_1: ByGender { male: 2_765_000.0, female: 3_097_000.0 }, toan_dien_2: ByGender { male: 3_571_000.0, female: 4_000_000.0 } },
    HealthCareRow { age: 35, co_ban: 1_164_000.0, nang_cao: 1_921_000.0, toan_dien_1: ByGender { male: 2_794_000.0, female: 3_129_000.0 }, toan_dien_2: ByGender { male: 3_608_000.0, female: 4_041_000.0 } },
    HealthCareRow { age: 36, co_ban: 1_176_000.0, nang_cao: 1_940_000.0, toan_dien_1: ByGender { male: 2_822_000.0, female: 3_161_000.0 }, toan_dien_2: ByGender { male: 3_646_000.0, female: 4_084_000.0 } },
    HealthCareRow { age: 37, co_ban: 1_188_000.0, nang_cao: 1_960_000.0, toan_dien_1: ByGender { male: 2_851_000.0, female: 3_193_000.0 }, toan_dien_2: ByGender { male: 3_683_000.0, female: 4_125_000.0 } },
    HealthCareRow { age: 38, co_ban: 1_200_000.0, nang_cao: 1_980_000.0, toan_dien_1: ByGender { male: 2_880_000.0, female: 3_226_000.0 }, toan_dien_2: ByGender { male: 3_720_000.0, female: 4_166_000.0 } },
    HealthCareRow { age: 39, co_ban: 1_212_000.0, nang_cao: 2_000_000.0, toan_dien_1: ByGender { male: 2_909_000.0, female: 3_258_000.0 }, toan_dien_2: ByGender { male: 3_757_000.0, female: 4_208_000.0 } },
    HealthCareRow { age: 40, co_ban: 1_260_000.0, nang_cao: 2_079_000.0, toan_dien_1: ByGender { male: 3_024_000.0, female: 3_387_000.0 }, toan_dien_2: ByGender { male: 3_906_000.0, female: 4_375_000.0 } },
    HealthCareRow { age: 41, co_ban: 1_296_000.0, nang_cao: 2_138_000.0, toan_dien_1: ByGender { male: 3_110_000.0, female: 3_483_000.0 }, toan_dien_2: ByGender { male: 4_018_000.0, female: 4_500_000.0 } },
    HealthCareRow { age: 42, co_ban: 1_332_000.0, nang_cao: 2_198_000.0, toan_dien_1: ByGender { male: 3_197_000.0, female: 3_581_000.0 }, toan_dien_2: ByGender { male: 4_129_000.0, female: 4_624_000.0 } },
    HealthCareRow { age: 43, co_ban: 1_368_000.0, nang_cao: 2_257_000.0, toan_dien_1: ByGender { male: 3_283_000.0, female: 3_677_000.0 }, toan_dien_2: ByGender { male: 4_241_000.0, female: 4_750_000.0 } },
    HealthCareRow { age: 44, co_ban: 1_404_000.0, nang_cao: 2_317_000.0, toan_dien_1: ByGender { male: 3_370_000.0, female: 3_774_000.0 }, toan_dien_2: ByGender { male: 4_352_000.0, female: 4_874_000.0 } },
    HealthCareRow { age: 45, co_ban: 1_440_000.0, nang_cao: 2_376_000.0, toan_dien_1: ByGender { male: 3_456_000.0, female: 3_871_000.0 }, toan_dien_2: ByGender { male: 4_464_000.0, female: 5_000_000.0 } },
    HealthCareRow { age: 46, co_ban: 1_476_000.0, nang_cao: 2_435_000.0, toan_dien_1: ByGender { male: 3_542_000.0, female: 3_967_000.0 }, toan_dien_2: ByGender { male: 4_576_000.0, female: 5_125_000.0 } },
    HealthCareRow { age: 47, co_ban: 1_512_000.0, nang_cao: 2_495_000.0, toan_dien_1: ByGender { male: 3_629_000.0, female: 4_064_000.0 }, toan_dien_2: ByGender { male: 4_687_000.0, female: 5_249_000.0 } },
    HealthCareRow { age: 48, co_ban: 1_548_000.0, nang_cao: 2_554_000.0, toan_dien_1: ByGender { male: 3_715_000.0, female: 4_161_000.0 }, toan_dien_2: ByGender { male: 4_799_000.0, female: 5_375_000.0 } },
    HealthCareRow { age: 49, co_ban: 1_584_000.0, nang_cao: 2_614_000.0, toan_dien_1: ByGender { male: 3_802_000.0, female: 4_258_000.0 }, toan_dien_2: ByGender { male: 4_910_000.0, female: 5_499_000.0 } },
    HealthCareRow { age: 50, co_ban: 1_620_000.0, nang_cao: 2_673_000.0, toan_dien_1: ByGender { male: 3_888_000.0, female: 4_355_000.0 }, toan_dien_2: ByGender { male: 5_022_000.0, female: 5_625_000.0 } },
    HealthCareRow { age: 51, co_ban: 1_656_000.0, nang_cao: 2_732_000.0, toan_dien_1: ByGender { male: 3_974_000.0, female: 4_451_000.0 }, toan_dien_2: ByGender { male: 5_134_000.0, female: 5_750_000.0 } },
    HealthCareRow { age: 52, co_ban: 1_692_000.0, nang_cao: 2_792_000.0, toan_dien_1: ByGender { male: 4_061_000.0, female: 4_548_000.0 }, toan_dien_2: ByGender { male: 5_245_000.0, female: 5_874_000.0 } },
    HealthCareRow { age: 53, co_ban: 1_728_000.0, nang_cao: 2_851_000.0, toan_dien_1: ByGender { male: 4_147_000.0, female: 4_645_000.0 }, toan_dien_2: ByGender { male: 5_357_000.0, female: 6_000_000.0 } },
    HealthCareRow { age: 54, co_ban: 1_764_000.0, nang_cao: 2_911_000.0, toan_dien_1: ByGender { male: 4_234_000.0, female: 4_742_000.0 }, toan_dien_2: ByGender { male: 5_468_000.0, female: 6_124_000.0 } },
    HealthCareRow { age: 55, co_ban: 1_800_000.0, nang_cao: 2_970_000.0, toan_dien_1: ByGender { male: 4_320_000.0, female: 4_838_000.0 }, toan_dien_2: ByGender { male: 5_580_000.0, female: 6_250_000.0 } },
    HealthCareRow { age: 56, co_ban: 1_836_000.0, nang_cao: 3_029_000.0, toan_dien_1: ByGender { male: 4_406_000.0, female: 4_935_000.0 }, toan_dien_2: ByGender { male: 5_692_000.0, female: 6_375_000.0 } },
    HealthCareRow { age: 57, co_ban: 1_872_000.0, nang_cao: 3_089_000.0, toan_dien_1: ByGender { male: 4_493_000.0, female: 5_032_000.0 }, toan_dien_2: ByGender { male: 5_803_000.0, female: 6_499_000.0 } },
    HealthCareRow { age: 58, co_ban: 1_908_000.0, nang_cao: 3_148_000.0, toan_dien_1: ByGender { male: 4_579_000.0, female: 5_128_000.0 }, toan_dien_2: ByGender { male: 5_915_000.0, female: 6_625_000.0 } },
    HealthCareRow { age: 59, co_ban: 1_944_000.0, nang_cao: 3_208_000.0, toan_dien_1: ByGender { male: 4_666_000.0, female: 5_226_000.0 }, toan_dien_2: ByGender { male: 6_026_000.0, female: 6_749_000.0 } },
    HealthCareRow { age: 60, co_ban: 1_980_000.0, nang_cao: 3_267_000.0, toan_dien_1: ByGender { male: 4_752_000.0, female: 5_322_000.0 }, toan_dien_2: ByGender { male: 6_138_000.0, female: 6_875_000.0 } },
    HealthCareRow { age: 61, co_ban: 2_016_000.0, nang_cao: 3_326_000.0, toan_dien_1: ByGender { male: 4_838_000.0, female: 5_419_000.0 }, toan_dien_2: ByGender { male: 6_250_000.0, female: 7_000_000.0 } },
    HealthCareRow { age: 62, co_ban: 2_052_000.0, nang_cao: 3_386_000.0, toan_dien_1: ByGender { male: 4_925_000.0, female: 5_516_000.0 }, toan_dien_2: ByGender { male: 6_361_000.0, female: 7_124_000.0 } },
    HealthCareRow { age: 63, co_ban: 2_088_000.0, nang_cao: 3_445_000.0, toan_dien_1: ByGender { male: 5_011_000.0, female: 5_612_000.0 }, toan_dien_2: ByGender { male: 6_473_000.0, female: 7_250_000.0 } },
    HealthCareRow { age: 64, co_ban: 2_124_000.0, nang_cao: 3_505_000.0, toan_dien_1: ByGender { male: 5_098_000.0, female: 5_710_000.0 }, toan_dien_2: ByGender { male: 6_584_000.0, female: 7_374_000.0 } },
    HealthCareRow { age: 65, co_ban: 2_160_000.0, nang_cao: 3_564_000.0, toan_dien_1: ByGender { male: 5_184_000.0, female: 5_806_000.0 }, toan_dien_2: ByGender { male: 6_696_000.0, female: 7_500_000.0 } },
];

/// Row for an exact age, if tabulated
pub fn health_care_row(age: u32) -> Option<&'static HealthCareRow> {
    HEALTH_CARE_FEES.iter().find(|row| row.age == age)
}
