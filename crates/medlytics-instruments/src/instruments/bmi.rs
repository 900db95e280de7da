//! BMI classification and nutrition scoring with calorie and meal planning.

use medlytics_core::models::analysis::AnalysisKind;
use medlytics_core::models::demographics::{BloodPressure, Gender};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::outcome::{Impact, Recommendations, RiskLevel};
use crate::scoring::{Item, ScoreRange, Section};
use crate::{Assessment, Instrument, assess_with};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MealPreparation {
    #[default]
    Home,
    Restaurant,
    Takeout,
}

/// BMI and nutrition questionnaire. Habit fields default to a typical
/// respondent rather than zero so an unanswered habit neither helps nor hurts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct BmiInput {
    pub age: u32,
    pub gender: Option<Gender>,
    /// Centimetres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,

    pub sleep_duration: Option<f64>,
    pub quality_of_sleep: Option<u32>,
    pub physical_activity_level: Option<u32>,
    pub stress_level: Option<u32>,
    pub blood_pressure: Option<BloodPressure>,
    pub heart_rate: Option<u32>,
    pub daily_steps: u32,

    pub meals_per_day: u32,
    /// Glasses per day.
    pub water_intake: u32,
    pub vegetable_servings: u32,
    pub fruit_servings: u32,
    /// 0 = never … 3 = daily.
    pub processed_food_frequency: u32,
    /// Times per week.
    pub fast_food_frequency: u32,
    pub breakfast_habit: bool,
    pub emotional_eating: bool,
    pub bing_eating: bool,
    pub late_night_snacking: bool,
    /// 0–5.
    pub sugar_intake: u32,
    /// Drinks per week.
    pub alcohol_consumption: u32,
    pub supplements_used: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    /// Home-cooked meals per week.
    pub cooking_frequency: u32,
    pub meal_preparation: MealPreparation,
    /// 0–10.
    pub portion_control: u32,
    /// 0–5.
    pub snacking_habits: u32,
}

impl Default for BmiInput {
    fn default() -> Self {
        Self {
            age: 0,
            gender: None,
            height: 0.0,
            weight: 0.0,
            sleep_duration: None,
            quality_of_sleep: None,
            physical_activity_level: None,
            stress_level: None,
            blood_pressure: None,
            heart_rate: None,
            daily_steps: 0,
            meals_per_day: 3,
            water_intake: 6,
            vegetable_servings: 2,
            fruit_servings: 2,
            processed_food_frequency: 2,
            fast_food_frequency: 1,
            breakfast_habit: true,
            emotional_eating: false,
            bing_eating: false,
            late_night_snacking: false,
            sugar_intake: 2,
            alcohol_consumption: 1,
            supplements_used: Vec::new(),
            dietary_restrictions: Vec::new(),
            cooking_frequency: 3,
            meal_preparation: MealPreparation::Home,
            portion_control: 5,
            snacking_habits: 2,
        }
    }
}

impl BmiInput {
    /// Body mass index; 0 when height is missing.
    pub fn bmi(&self) -> f64 {
        let meters = self.height / 100.0;
        if meters > 0.0 {
            self.weight / (meters * meters)
        } else {
            0.0
        }
    }

    fn is_male(&self) -> bool {
        self.gender == Some(Gender::Male)
    }

    fn is_plant_based(&self) -> bool {
        self.dietary_restrictions
            .iter()
            .any(|r| r.eq_ignore_ascii_case("vegetarian") || r.eq_ignore_ascii_case("vegan"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BmiCategory {
    #[serde(rename = "Severe Thinness")]
    SevereThinness,
    #[serde(rename = "Moderate Thinness")]
    ModerateThinness,
    #[serde(rename = "Mild Thinness")]
    MildThinness,
    Normal,
    Overweight,
    #[serde(rename = "Obese Class I")]
    ObeseClassI,
    #[serde(rename = "Obese Class II")]
    ObeseClassII,
    #[serde(rename = "Obese Class III")]
    ObeseClassIII,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HealthRisk {
    Minimal,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    #[serde(rename = "Extremely High")]
    ExtremelyHigh,
}

impl HealthRisk {
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            HealthRisk::Minimal => RiskLevel::Low,
            HealthRisk::Moderate => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }
}

/// Category boundaries are exclusive upper bounds.
const CATEGORIES: [(f64, BmiCategory, HealthRisk); 8] = [
    (16.0, BmiCategory::SevereThinness, HealthRisk::VeryHigh),
    (17.0, BmiCategory::ModerateThinness, HealthRisk::High),
    (18.5, BmiCategory::MildThinness, HealthRisk::Moderate),
    (25.0, BmiCategory::Normal, HealthRisk::Minimal),
    (30.0, BmiCategory::Overweight, HealthRisk::Moderate),
    (35.0, BmiCategory::ObeseClassI, HealthRisk::High),
    (40.0, BmiCategory::ObeseClassII, HealthRisk::VeryHigh),
    (f64::INFINITY, BmiCategory::ObeseClassIII, HealthRisk::ExtremelyHigh),
];

pub fn classify(bmi: f64) -> (BmiCategory, HealthRisk) {
    CATEGORIES
        .iter()
        .find(|(upper, _, _)| bmi < *upper)
        .map(|(_, category, risk)| (*category, *risk))
        .unwrap_or((BmiCategory::ObeseClassIII, HealthRisk::ExtremelyHigh))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutritionFactor {
    pub name: String,
    pub impact: Impact,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MacroTarget {
    pub grams: i64,
    pub calories: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Macronutrients {
    pub protein: MacroTarget,
    pub carbs: MacroTarget,
    pub fats: MacroTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Meal {
    pub calories: i64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Meal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BodyWeightStatus {
    #[serde(rename = "Below Healthy Range")]
    BelowHealthyRange,
    #[serde(rename = "Healthy Range")]
    HealthyRange,
    #[serde(rename = "Above Healthy Range")]
    AboveHealthyRange,
    #[serde(rename = "Obese Range")]
    ObeseRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum NutritionalStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ActivityLevel {
    Active,
    Moderate,
    Light,
    Sedentary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthMetrics {
    pub body_weight_status: BodyWeightStatus,
    pub nutritional_status: NutritionalStatus,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BmiAssessment {
    /// One decimal place.
    pub calculated_bmi: f64,
    pub bmi_category: BmiCategory,
    pub health_risk: HealthRisk,
    pub risk_level: RiskLevel,
    pub nutrition_score: u32,
    pub target_calories: i64,
    pub bmr: i64,
    pub macronutrients: Macronutrients,
    pub key_factors: Vec<NutritionFactor>,
    pub recommendations: Vec<String>,
    pub meal_plan: MealPlan,
    pub confidence: u32,
    pub health_metrics: HealthMetrics,
}

#[derive(Default)]
struct Tally {
    score: u32,
    factors: Vec<NutritionFactor>,
    recs: Recommendations,
}

impl Tally {
    fn factor(&mut self, name: &str, impact: Impact, value: impl Into<String>) {
        self.factors.push(NutritionFactor {
            name: name.to_string(),
            impact,
            value: value.into(),
        });
    }

    fn penalty(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }
}

pub fn score_bmi(input: &BmiInput) -> BmiAssessment {
    let bmi = input.bmi();
    let (bmi_category, health_risk) = classify(bmi);
    let mut tally = Tally::default();

    score_habits(input, &mut tally);

    let bmr = basal_metabolic_rate(input);
    let maintenance = (bmr * activity_multiplier(input.daily_steps)).round() as i64;

    let calorie_goal = if bmi < 18.5 {
        let goal = maintenance + 300;
        tally.recs.push(format!("Aim for {goal} calories daily to gain weight healthily"));
        goal
    } else if bmi > 25.0 {
        let goal = maintenance - 500;
        tally
            .recs
            .push(format!("Aim for {goal} calories daily for steady weight loss (1-2 lbs/week)"));
        goal
    } else {
        tally
            .recs
            .push(format!("Maintain {maintenance} calories daily to preserve current weight"));
        maintenance
    };

    let macronutrients = macronutrients(input, calorie_goal);
    let meal_plan = meal_plan(calorie_goal, input.is_plant_based());

    if bmi < 18.5 {
        tally.recs.extend([
            "Focus on nutrient-dense, calorie-rich foods: nuts, avocados, whole grains",
            "Add strength training to build muscle mass",
            "Eat 5-6 smaller meals throughout the day",
        ]);
    } else if (25.0..30.0).contains(&bmi) {
        tally.recs.extend([
            "Increase physical activity to 150-300 minutes per week",
            "Focus on whole foods and reduce calorie-dense snacks",
            "Track your food intake to stay accountable",
        ]);
    } else if bmi >= 30.0 {
        tally.recs.extend([
            "Consult a doctor or registered dietitian for personalized guidance",
            "Start with small, sustainable changes - walk 30 min daily",
            "Consider seeking support groups for weight management",
            "Get screened for metabolic conditions (diabetes, cholesterol)",
        ]);
    }

    if let Some(bp) = input.blood_pressure.filter(BloodPressure::is_hypertensive) {
        tally.factor("Hypertension", Impact::High, format!("{}/{}", bp.systolic, bp.diastolic));
        tally.recs.push("Reduce sodium intake and follow DASH diet for blood pressure");
    }
    if let Some(stress) = input.stress_level.filter(|s| *s > 7) {
        tally.factor("High Stress", Impact::High, format!("{stress}/10"));
        tally
            .recs
            .push("Chronic stress affects weight - practice stress management techniques");
    }
    if let Some(hours) = input.sleep_duration.filter(|h| *h < 7.0) {
        tally.factor("Insufficient Sleep", Impact::High, format!("{hours} hours"));
        tally.recs.push("Poor sleep increases hunger hormones - aim for 7-9 hours");
    }

    let nutrition_score = tally.score;
    let confidence = (70.0 + f64::from(nutrition_score) * 0.3).min(100.0).round() as u32;

    let assessment = BmiAssessment {
        calculated_bmi: (bmi * 10.0).round() / 10.0,
        bmi_category,
        health_risk,
        risk_level: health_risk.risk_level(),
        nutrition_score,
        target_calories: calorie_goal,
        bmr: bmr.round() as i64,
        macronutrients,
        key_factors: tally.factors,
        recommendations: tally.recs.into_vec(),
        meal_plan,
        confidence,
        health_metrics: HealthMetrics {
            body_weight_status: if bmi < 18.5 {
                BodyWeightStatus::BelowHealthyRange
            } else if bmi < 25.0 {
                BodyWeightStatus::HealthyRange
            } else if bmi < 30.0 {
                BodyWeightStatus::AboveHealthyRange
            } else {
                BodyWeightStatus::ObeseRange
            },
            nutritional_status: match nutrition_score {
                80.. => NutritionalStatus::Excellent,
                60..=79 => NutritionalStatus::Good,
                40..=59 => NutritionalStatus::Fair,
                _ => NutritionalStatus::Poor,
            },
            activity_level: match input.daily_steps {
                10_000.. => ActivityLevel::Active,
                7_000..=9_999 => ActivityLevel::Moderate,
                5_000..=6_999 => ActivityLevel::Light,
                _ => ActivityLevel::Sedentary,
            },
        },
    };

    tracing::debug!(
        bmi = assessment.calculated_bmi,
        category = ?assessment.bmi_category,
        nutrition_score,
        "bmi questionnaire scored"
    );

    assessment
}

/// Nutrition score out of 100 from eating habits, with penalties floored at 0.
fn score_habits(input: &BmiInput, tally: &mut Tally) {
    let water = input.water_intake;
    match water {
        8.. => tally.score += 15,
        6..=7 => {
            tally.score += 12;
            tally.recs.push("Increase water intake to 8 glasses per day");
        }
        4..=5 => {
            tally.score += 8;
            tally.factor("Low Water Intake", Impact::Moderate, format!("{water} glasses/day"));
            tally.recs.push("Drink more water - aim for at least 8 glasses daily");
        }
        _ => {
            tally.score += 4;
            tally.factor("Very Low Water Intake", Impact::High, format!("{water} glasses/day"));
            tally
                .recs
                .push("CRITICAL: Increase water intake significantly - dehydration affects metabolism");
        }
    }

    let vegetables = input.vegetable_servings;
    match vegetables {
        5.. => tally.score += 15,
        3..=4 => {
            tally.score += 12;
            tally.recs.push("Try to reach 5 servings of vegetables daily");
        }
        _ => {
            tally.score += 6;
            tally.factor("Insufficient Vegetables", Impact::High, format!("{vegetables} servings/day"));
            tally.recs.push("Increase vegetable intake to at least 5 servings per day");
        }
    }

    match input.fruit_servings {
        3.. => tally.score += 10,
        2 => tally.score += 7,
        _ => {
            tally.score += 4;
            tally.recs.push("Include 2-3 servings of fruit daily");
        }
    }

    match input.processed_food_frequency {
        0 => tally.score += 15,
        1 => tally.score += 12,
        2 => {
            tally.score += 8;
            tally.factor("Moderate Processed Food", Impact::Moderate, "Several times/week");
            tally
                .recs
                .push("Reduce processed food consumption - cook fresh meals more often");
        }
        _ => {
            tally.score += 3;
            tally.factor("High Processed Food", Impact::High, "Daily");
            tally
                .recs
                .push("IMPORTANT: Minimize processed foods - they increase health risks significantly");
        }
    }

    let fast_food = input.fast_food_frequency;
    match fast_food {
        0 => tally.score += 10,
        1 => tally.score += 7,
        2..=3 => {
            tally.score += 4;
            tally.factor("Frequent Fast Food", Impact::Moderate, format!("{fast_food} times/week"));
            tally.recs.push("Limit fast food to once per week or less");
        }
        _ => {
            tally.score += 2;
            tally.factor("Excessive Fast Food", Impact::High, format!("{fast_food} times/week"));
            tally
                .recs
                .push("CRITICAL: Fast food is sabotaging your health goals - reduce immediately");
        }
    }

    if input.breakfast_habit {
        tally.score += 10;
    } else {
        tally.score += 4;
        tally.factor("Skipping Breakfast", Impact::Moderate, "Regularly skipped");
        tally
            .recs
            .push("Eat a healthy breakfast to boost metabolism and reduce cravings");
    }

    let meals = input.meals_per_day;
    if (3..=5).contains(&meals) {
        tally.score += 5;
    } else if meals < 3 {
        tally.factor("Irregular Eating", Impact::Moderate, format!("{meals} meals/day"));
        tally.recs.push("Eat regular meals - skipping meals can slow metabolism");
    }

    match input.portion_control {
        7.. => tally.score += 10,
        5..=6 => tally.score += 7,
        _ => {
            tally.score += 3;
            tally.factor("Poor Portion Control", Impact::High, "Needs improvement");
            tally
                .recs
                .push("Practice portion control using smaller plates and mindful eating");
        }
    }

    match input.sugar_intake {
        0..=1 => tally.score += 10,
        2 => tally.score += 7,
        _ => {
            tally.score += 3;
            tally.factor("High Sugar Intake", Impact::High, "Above recommended");
            tally
                .recs
                .push("Reduce added sugars - use natural sweeteners or fruits instead");
        }
    }

    if input.emotional_eating {
        tally.penalty(5);
        tally.factor("Emotional Eating", Impact::High, "Yes");
        tally
            .recs
            .push("Address emotional eating with mindfulness or counseling");
    }
    if input.bing_eating {
        tally.penalty(10);
        tally.factor("Binge Eating", Impact::High, "Yes");
        tally
            .recs
            .push("IMPORTANT: Seek professional help for binge eating disorder");
    }
    if input.late_night_snacking {
        tally.penalty(3);
        tally.factor("Late Night Snacking", Impact::Moderate, "Yes");
        tally
            .recs
            .push("Avoid eating 2-3 hours before bedtime for better digestion");
    }
}

/// Mifflin-St Jeor.
fn basal_metabolic_rate(input: &BmiInput) -> f64 {
    let base = 10.0 * input.weight + 6.25 * input.height - 5.0 * f64::from(input.age);
    if input.is_male() { base + 5.0 } else { base - 161.0 }
}

fn activity_multiplier(daily_steps: u32) -> f64 {
    match daily_steps {
        0..3_000 => 1.2,
        3_000..7_000 => 1.375,
        7_000..10_000 => 1.55,
        _ => 1.725,
    }
}

fn macronutrients(input: &BmiInput, calorie_goal: i64) -> Macronutrients {
    let protein_per_kg = if input.is_male() { 1.6 } else { 1.4 };
    let protein_grams = input.weight * protein_per_kg;
    let goal = calorie_goal as f64;
    let protein_share = if calorie_goal > 0 {
        (input.weight * 1.5 * 4.0 / goal * 100.0).round() as i64
    } else {
        0
    };

    Macronutrients {
        protein: MacroTarget {
            grams: protein_grams.round() as i64,
            calories: (protein_grams * 4.0).round() as i64,
            percentage: protein_share,
        },
        carbs: MacroTarget {
            grams: (goal * 0.45 / 4.0).round() as i64,
            calories: (goal * 0.45).round() as i64,
            percentage: 45,
        },
        fats: MacroTarget {
            grams: (goal * 0.25 / 9.0).round() as i64,
            calories: (goal * 0.25).round() as i64,
            percentage: 25,
        },
    }
}

const BREAKFASTS: [&str; 4] = [
    "Oatmeal with berries, nuts, and protein powder",
    "Greek yogurt parfait with granola and fruits",
    "Whole grain toast with avocado and eggs",
    "Smoothie bowl with spinach, banana, and protein",
];

const LUNCHES: [&str; 4] = [
    "Grilled chicken salad with quinoa and mixed vegetables",
    "Salmon with brown rice and steamed broccoli",
    "Lentil soup with whole grain bread",
    "Turkey and vegetable wrap with hummus",
];

const DINNERS: [&str; 4] = [
    "Lean beef stir-fry with mixed vegetables and brown rice",
    "Baked fish with sweet potato and green beans",
    "Chicken breast with roasted vegetables and quinoa",
    "Tofu curry with cauliflower rice",
];

const SNACKS: [&str; 4] = [
    "Apple slices with almond butter",
    "Mixed nuts (handful)",
    "Carrot sticks with hummus",
    "Protein shake or bar",
];

fn owned(meals: &[&str]) -> Vec<String> {
    meals.iter().map(|m| m.to_string()).collect()
}

/// Drop suggestions mentioning any excluded ingredient and lead with `substitute`.
fn substitute_meals(meals: &[&str], excluded: &[&str], substitute: &str) -> Vec<String> {
    std::iter::once(substitute.to_string())
        .chain(
            meals
                .iter()
                .filter(|m| {
                    let lower = m.to_lowercase();
                    !excluded.iter().any(|e| lower.contains(e))
                })
                .map(|m| m.to_string()),
        )
        .collect()
}

fn meal_plan(calories: i64, plant_based: bool) -> MealPlan {
    let share = |fraction: f64| (calories as f64 * fraction).round() as i64;

    let (lunch, dinner) = if plant_based {
        (
            substitute_meals(
                &LUNCHES,
                &["chicken", "salmon", "turkey"],
                "Chickpea buddha bowl with tahini dressing",
            ),
            substitute_meals(
                &DINNERS,
                &["beef", "fish", "chicken"],
                "Black bean and vegetable enchiladas",
            ),
        )
    } else {
        (owned(&LUNCHES), owned(&DINNERS))
    };

    MealPlan {
        breakfast: Meal {
            calories: share(0.25),
            suggestions: owned(&BREAKFASTS),
        },
        lunch: Meal {
            calories: share(0.35),
            suggestions: lunch,
        },
        dinner: Meal {
            calories: share(0.30),
            suggestions: dinner,
        },
        snacks: Meal {
            calories: share(0.10),
            suggestions: owned(&SNACKS),
        },
    }
}

/// BMI classification with nutrition scoring and a calorie plan.
pub struct BmiNutrition;

impl Instrument for BmiNutrition {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Bmi
    }

    fn name(&self) -> &str {
        "BMI & Nutrition Analysis"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section::new(
                    "body",
                    "Body Measurements",
                    vec![
                        Item::count("age", "Age", ScoreRange::integer(1, 120)),
                        Item::measurement("height", "Height (cm)", ScoreRange::continuous(50.0, 272.0)).required(),
                        Item::measurement("weight", "Weight (kg)", ScoreRange::continuous(10.0, 500.0)).required(),
                        Item::measurement("bloodPressure.systolic", "Systolic blood pressure", ScoreRange::integer(60, 260)),
                        Item::measurement("bloodPressure.diastolic", "Diastolic blood pressure", ScoreRange::integer(30, 160)),
                        Item::measurement("heartRate", "Resting heart rate", ScoreRange::integer(20, 250)),
                    ],
                ),
                Section::new(
                    "lifestyle",
                    "Lifestyle",
                    vec![
                        Item::measurement("sleepDuration", "Sleep duration (hours)", ScoreRange::continuous(0.0, 24.0)),
                        Item::slider("qualityOfSleep", "Quality of sleep", ScoreRange::integer(1, 10)),
                        Item::slider("stressLevel", "Stress level", ScoreRange::integer(1, 10)),
                        Item::count("dailySteps", "Daily steps", ScoreRange::integer(0, 100_000)),
                    ],
                ),
                Section::new(
                    "nutrition",
                    "Eating Habits",
                    vec![
                        Item::count("mealsPerDay", "Meals per day", ScoreRange::integer(0, 10)),
                        Item::count("waterIntake", "Water (glasses/day)", ScoreRange::integer(0, 30)),
                        Item::count("vegetableServings", "Vegetable servings/day", ScoreRange::integer(0, 20)),
                        Item::count("fruitServings", "Fruit servings/day", ScoreRange::integer(0, 20)),
                        Item::ordinal("processedFoodFrequency", "Processed food")
                            .describe("0 = never, 3 = daily"),
                        Item::count("fastFoodFrequency", "Fast food (times/week)", ScoreRange::integer(0, 21)),
                        Item::flag("breakfastHabit", "Eats breakfast"),
                        Item::flag("emotionalEating", "Emotional eating"),
                        Item::flag("bingEating", "Binge eating"),
                        Item::flag("lateNightSnacking", "Late night snacking"),
                        Item::slider("sugarIntake", "Sugar intake", ScoreRange::integer(0, 5)),
                        Item::count("alcoholConsumption", "Alcohol (drinks/week)", ScoreRange::integer(0, 100)),
                        Item::count("cookingFrequency", "Home cooking (times/week)", ScoreRange::integer(0, 21)),
                        Item::slider("portionControl", "Portion control", ScoreRange::integer(0, 10)),
                        Item::slider("snackingHabits", "Snacking", ScoreRange::integer(0, 5)),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn assess(&self, body: serde_json::Value) -> Result<Assessment, InstrumentError> {
        assess_with(body, score_bmi, |result: &BmiAssessment| result.risk_level)
    }
}
