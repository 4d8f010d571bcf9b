//! Question keys and option texts shared by the scoring stages.
//!
//! Option texts are matched verbatim against what the questionnaire UI
//! submits, so they stay in the questionnaire's language.

// Experienced questionnaire keys
pub const AGE: &str = "e1_1";
pub const SELF_RATING: &str = "e1_3";
pub const PROFESSION: &str = "e1_5";
pub const SEASONS: &str = "e1_6";
pub const MOTORCYCLE: &str = "e1_7";
pub const START_YEAR: &str = "e1_start_year";
pub const RIDING_SINCE_YEAR: &str = "e0_riding_year";
pub const LANE_FILTERING: &str = "e2_1";
pub const LIVED_SITUATIONS: &str = "e2_2";
pub const WORRIED_SITUATIONS: &str = "e2_3";
pub const NEAR_MISSES: &str = "e2_4";
pub const CRASHES: &str = "e2_5";
pub const RISK_ATTITUDE: &str = "e3_1";
pub const GEAR: &str = "e4_2";
pub const TRAINING: &str = "e4_3";
pub const RIDING_STYLE: &str = "e4_4";
pub const BRAKING_CLAIMS: &str = "e5_1";
pub const BRAKING_60: &str = "e5_2";
pub const BRAKING_100: &str = "e5_3";
pub const BRAKING_150: &str = "e5_4";
pub const MANEUVERING_CLAIMS: &str = "e6_1";
pub const TRAJECTORY: &str = "e6_trajectory";
pub const CITY_SPEED: &str = "e7_1";
pub const GRIP: &str = "e7_2";
pub const LANE_POSITION: &str = "e7_3";
pub const WOBBLE_RESPONSE: &str = "e9_1";
pub const WET_BRAKING: &str = "e9_2";

/// Keys whose presence counts towards "enough answers to classify".
pub const SCORING_QUESTIONS: &[&str] = &[
    AGE,
    SELF_RATING,
    PROFESSION,
    SEASONS,
    MOTORCYCLE,
    START_YEAR,
    LANE_FILTERING,
    LIVED_SITUATIONS,
    WORRIED_SITUATIONS,
    NEAR_MISSES,
    CRASHES,
    RISK_ATTITUDE,
    GEAR,
    TRAINING,
    RIDING_STYLE,
    BRAKING_CLAIMS,
    BRAKING_60,
    BRAKING_100,
    BRAKING_150,
    MANEUVERING_CLAIMS,
    TRAJECTORY,
    CITY_SPEED,
    GRIP,
    LANE_POSITION,
    WOBBLE_RESPONSE,
    WET_BRAKING,
];

pub const SPEED_LOW: &str = "40-70 км/год";
pub const SPEED_MEDIUM: &str = "70-90 км/год";
pub const SPEED_HIGH: &str = "90-150 км/год";

pub const LANE_FILTERING_NEVER: &str = "Не їжджу";
pub const LANE_FILTERING_UNEASY: &str = "Дискомфортно, але їжджу";
pub const LANE_FILTERING_LOVES: &str = "Вільно почуваю, люблю затори";

pub const TRAINING_GYMKHANA: &str = "Джимхана";
pub const TRAINING_TRACK: &str = "Трек виїзди";
pub const TRAINING_MOTOCROSS: &str = "Мотокрос";
pub const TRAINING_ENDURO: &str = "Ендуро";
pub const TRAINING_PITBIKE: &str = "Пітбайки";

pub const CLAIM_BRAKE_60: &str = "Можу впевнено екстренно відгальмуватись з 60";
pub const CLAIM_BRAKE_100: &str = "Можу впевнено екстренно відгальмуватись з 100";
pub const CLAIM_BRAKE_150: &str = "Можу впевнено екстренно відгальмуватись зі 150";
pub const CLAIM_TRAIL_BRAKING: &str = "Трейлбрейкінг - впевнено практикую";
pub const CLAIM_FRONT_LOCK: &str = "Можу справитись з блоком переднього колеса";
pub const CLAIM_REAR_LOCK: &str = "Можу справитись з блоком заднього колеса";

pub const CLAIM_KNEE_DOWN: &str = "Можу поїхати в коліно";
pub const CLAIM_U_TURN: &str = "Впевнено можу розвернутись на вузькій дорозі без ніг";
pub const CLAIM_RAIN_CORNERING: &str = "Впевнено можу їхати в дощ в повороті";

pub const WOBBLE_RELAX: &str = "Розслабити руки, не гальмувати";
pub const WOBBLE_BRAKE: &str = "Гальмувати";

pub const GRIP_LIGHT: &str = "Легко, як філіжанку кави";
pub const GRIP_TIGHT: &str = "Міцно, щоб контролювати";

pub const POSITION_CENTER: &str = "По центру";
pub const POSITION_DYNAMIC: &str = "Постійно змінюю позицію";

// Lived situations (e2_2)
pub const CORNER_RUNOFF: &str = "Не розрахував швидкість-траєкторію -> виліт з повороту";
pub const CORNER_RUNOFF_SHORT: &str = "Виліт з повороту";
pub const CAUGHT_UP_WITH_CAR: &str = "Я догнав автівку";
pub const PASSENGER_FALL: &str = "Втратив баланс з пасажиркою і впав";
pub const BALANCE_FALL: &str = "Втрата балансу -> падіння";
pub const BALANCE_FALL_ALT: &str = "Втратив баланс і впав";
pub const RAILS_FALL: &str = "Впав на рейках";
pub const MUD_SLIP: &str = "Підсковзнувся на бруді";
pub const FRONT_WHEEL_LOCK: &str = "Блокування переднього колеса при гальмуванні";
pub const LEFT_TURNER: &str = "Лівий поворот автівки в мене";
pub const SIDE_ROAD_PULLOUT: &str = "Виїзд автівки з другорядної в мене";
pub const REAR_ENDED: &str = "В мене приїхала тачка ззаду";
pub const SIDE_IMPACT: &str = "В мене приїхала тачка збоку";

/// Lived situations that ended with the bike on the ground.
pub const FALL_SITUATIONS: &[&str] = &[
    BALANCE_FALL,
    BALANCE_FALL_ALT,
    RAILS_FALL,
    MUD_SLIP,
    CORNER_RUNOFF_SHORT,
];

/// Recognized hazards in the worried-about (e2_3) and unknown-situations
/// (b2_3) multi-selects.
pub const HAZARDS: &[&str] = &[
    "Лівий поворот автівки в мене",
    "Неприємності ізза блокера",
    "Неприємності через блокера",
    "Виїзд з другорядної автівки в мене",
    "Ями, Люки, Рейки, Бугри",
    "Слизькі люки, рейки",
    "Наїзд на ями, бугри",
    "\"Забув повернути\" від автівки",
    "Виїзд автівки на зустрічку",
    "Виїзд мені назустріч",
    "Неочікуванний пішохід",
    "Неочікуваний пішохід",
    "Проїзд автівки на червоний",
    "Необхідність екстренно гальмувати зі швидкості 80+",
    "Необхідність екстренно гальмувати на слизькому або поганому покритті",
    "Необхідність екстренно гальмувати на слизькому",
    "Необхідність екстренно гальмувати і маневрувати на прямій",
    "Необхідність екстренно гальмувати і маневрувати в повороті",
    "Не розрахував швидкість-траєкторію і виліт з повороту",
    "Нічні пригоди на незнайомій дорозі",
    "Помилку сприйняття у водія",
    "Проблема з фурами",
    "Неочікуване відкриття дверей автівки",
    "Засліплення вночі",
];

/// Ordered answer bands for one braking-distance question.
#[derive(Debug, Clone, Copy)]
pub struct BrakingBands {
    pub key: &'static str,
    pub bands: &'static [&'static str],
    pub correct: usize,
    pub dont_know: &'static str,
    pub claim: &'static str,
}

pub const BRAKING_FROM_60: BrakingBands = BrakingBands {
    key: BRAKING_60,
    bands: &["8-10 м", "12-14 м", "14-16 м", "16-17 м"],
    correct: 2,
    dont_know: "Не знаю",
    claim: CLAIM_BRAKE_60,
};

pub const BRAKING_FROM_100: BrakingBands = BrakingBands {
    key: BRAKING_100,
    bands: &["20-30 м", "30-35 м", "35-40 м", "45-53 м"],
    correct: 1,
    dont_know: "Хз не заміряв",
    claim: CLAIM_BRAKE_100,
};

pub const BRAKING_FROM_150: BrakingBands = BrakingBands {
    key: BRAKING_150,
    bands: &["40-50 м", "70-80 м", "90-100 м", "120-130 м"],
    correct: 1,
    dont_know: "Хз не заміряв",
    claim: CLAIM_BRAKE_150,
};

pub const BRAKING_QUESTIONS: [BrakingBands; 3] = [BRAKING_FROM_60, BRAKING_FROM_100, BRAKING_FROM_150];

impl BrakingBands {
    /// The band text that is correct for this speed.
    pub fn correct_band(&self) -> &'static str {
        self.bands[self.correct]
    }

    /// Position of `answer` in the ordered bands.
    pub fn position(&self, answer: &str) -> Option<usize> {
        self.bands.iter().position(|b| *b == answer)
    }
}
