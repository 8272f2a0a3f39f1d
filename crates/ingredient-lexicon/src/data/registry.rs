//! Built-in ingredient classification data.

use composition_core::{Effectiveness, IngredientCategory, IngredientColor};

use IngredientCategory::*;

/// One authored registry row.
pub struct Seed {
    pub name: &'static str,
    pub localized: &'static str,
    pub category: IngredientCategory,
    pub comedogenicity: u8,
    pub irritation: u8,
    pub allergenicity: bool,
    pub effectiveness: Effectiveness,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub warnings: &'static [&'static str],
    pub color: IngredientColor,
}

#[allow(clippy::too_many_arguments)]
const fn seed(
    name: &'static str,
    localized: &'static str,
    category: IngredientCategory,
    comedogenicity: u8,
    irritation: u8,
    allergenicity: bool,
    effectiveness: Effectiveness,
    tags: &'static [&'static str],
    description: &'static str,
    warnings: &'static [&'static str],
    color: IngredientColor,
) -> Seed {
    Seed {
        name,
        localized,
        category,
        comedogenicity,
        irritation,
        allergenicity,
        effectiveness,
        tags,
        description,
        warnings,
        color,
    }
}

const HIGH: Effectiveness = Effectiveness::High;
const MEDIUM: Effectiveness = Effectiveness::Medium;
const LOW: Effectiveness = Effectiveness::Low;
const MARKETING: Effectiveness = Effectiveness::Marketing;
const NEUTRAL: Effectiveness = Effectiveness::Neutral;

const GREEN: IngredientColor = IngredientColor::Green;
const YELLOW: IngredientColor = IngredientColor::Yellow;
const RED: IngredientColor = IngredientColor::Red;
const GRAY: IngredientColor = IngredientColor::Gray;

const SPF_AND_IRRITATION: &[&str] = &["Повышает фоточувствительность кожи", "Может вызвать раздражение"];
const PHOTOSENSITIVITY: &[&str] = &["Повышает фоточувствительность кожи"];
const FRAGRANCE_WARNINGS: &[&str] = &["Отдушка — частая причина аллергических реакций"];
const FRAGRANCE_ALLERGEN: &[&str] = &["Аллерген из списка ЕС, должен указываться на упаковке"];
const PARABEN_WARNINGS: &[&str] = &["Парабен — спорный консервант"];
const FORMALDEHYDE: &[&str] = &["Высвобождает формальдегид"];
const DRYING_ALCOHOL: &[&str] = &["Сушит кожу и может нарушать защитный барьер"];
const HARSH_SURFACTANT: &[&str] = &["Агрессивный ПАВ, может сушить и раздражать кожу"];

/// Registry rows in authoring order.
pub const SEEDS: &[Seed] = &[
    // Bases and solvents
    seed("Water", "Вода", Base, 0, 0, false, NEUTRAL, &[], "Основа большинства косметических средств, растворитель", &[], GREEN),
    seed("Alcohol", "Спирт", Solvent, 0, 2, false, LOW, &["alcohol", "drying"], "Этиловый спирт, растворитель и проводник активов", DRYING_ALCOHOL, YELLOW),
    seed("Alcohol Denat", "Денатурированный спирт", Solvent, 0, 3, false, LOW, &["alcohol", "drying"], "Денатурированный спирт, ускоряет впитывание и высыхание", DRYING_ALCOHOL, YELLOW),
    seed("Isopropyl Alcohol", "Изопропиловый спирт", Solvent, 0, 3, false, LOW, &["alcohol", "drying"], "Изопропиловый спирт, растворитель и антисептик", DRYING_ALCOHOL, YELLOW),
    seed("Benzyl Alcohol", "Бензиловый спирт", Preservative, 0, 1, true, NEUTRAL, &["alcohol", "fragrance"], "Ароматический спирт, консервант и компонент отдушек", FRAGRANCE_ALLERGEN, YELLOW),
    seed("Propylene Glycol", "Пропиленгликоль", Humectant, 0, 1, false, LOW, &[], "Увлажнитель и проводник активных веществ", &[], GREEN),
    seed("Butylene Glycol", "Бутиленгликоль", Humectant, 1, 0, false, LOW, &[], "Мягкий увлажнитель и растворитель", &[], GREEN),
    seed("Pentylene Glycol", "Пентиленгликоль", Humectant, 0, 0, false, LOW, &[], "Увлажнитель с консервирующими свойствами", &[], GREEN),
    seed("Caprylyl Glycol", "Каприлил гликоль", Humectant, 0, 0, false, LOW, &[], "Увлажнитель, усиливает действие консервантов", &[], GREEN),
    // Humectants
    seed("Glycerin", "Глицерин", Humectant, 0, 0, false, MEDIUM, &["moisturizing"], "Притягивает и удерживает влагу в коже", &[], GREEN),
    seed("Hyaluronic Acid", "Гиалуроновая кислота", Humectant, 0, 0, false, HIGH, &["moisturizing", "anti_aging"], "Мощный увлажнитель, удерживает воду в верхних слоях кожи", &[], GREEN),
    seed("Sodium Hyaluronate", "Гиалуронат натрия", Humectant, 0, 0, false, HIGH, &["moisturizing", "anti_aging"], "Соль гиалуроновой кислоты, глубже проникает в кожу", &[], GREEN),
    seed("Urea", "Мочевина", Humectant, 0, 1, false, HIGH, &["moisturizing"], "Увлажняет и мягко отшелушивает огрубевшую кожу", &[], GREEN),
    seed("Sodium PCA", "ПКН натрия", Humectant, 0, 0, false, MEDIUM, &["moisturizing"], "Компонент натурального увлажняющего фактора кожи", &[], GREEN),
    seed("Betaine", "Бетаин", Humectant, 0, 0, false, MEDIUM, &["moisturizing", "soothing"], "Увлажняет и снижает раздражающее действие ПАВ", &[], GREEN),
    seed("Trehalose", "Трегалоза", Humectant, 0, 0, false, MEDIUM, &["moisturizing"], "Сахар, защищающий клетки от обезвоживания", &[], GREEN),
    seed("Sorbitol", "Сорбитол", Humectant, 0, 0, false, LOW, &[], "Сахарный спирт, увлажнитель", &[], GREEN),
    // Actives
    seed("Niacinamide", "Ниацинамид", Active, 0, 0, false, HIGH, &["niacinamide", "brightening", "acne_fighter", "anti_aging"], "Витамин B3: выравнивает тон, сужает поры, укрепляет барьер", &[], GREEN),
    seed("Retinol", "Ретинол", Active, 0, 3, false, HIGH, &["retinol", "anti_aging", "acne_fighter"], "Витамин A, стимулирует обновление клеток и синтез коллагена", SPF_AND_IRRITATION, YELLOW),
    seed("Retinal", "Ретиналь", Active, 0, 3, false, HIGH, &["retinol", "anti_aging"], "Альдегид ретинола, действует быстрее ретинола", SPF_AND_IRRITATION, YELLOW),
    seed("Retinyl Palmitate", "Ретинил пальмитат", Active, 0, 1, false, LOW, &["retinol", "anti_aging"], "Мягкий эфир ретинола с низкой активностью", PHOTOSENSITIVITY, GREEN),
    seed("Adapalene", "Адапален", Active, 0, 3, false, HIGH, &["retinol", "acne_fighter"], "Синтетический ретиноид для лечения акне", SPF_AND_IRRITATION, YELLOW),
    seed("Bakuchiol", "Бакучиол", Active, 0, 0, false, MEDIUM, &["anti_aging"], "Растительная альтернатива ретинолу", &[], GREEN),
    seed("Ascorbic Acid", "Аскорбиновая кислота", Antioxidant, 0, 2, false, HIGH, &["vitamin_c", "brightening", "anti_pigmentation", "anti_aging"], "Витамин C, антиоксидант, осветляет пигментацию", &["Нестабилен, может раздражать в высокой концентрации"], GREEN),
    seed("Ascorbyl Glucoside", "Аскорбил глюкозид", Antioxidant, 0, 0, false, MEDIUM, &["vitamin_c", "brightening"], "Стабильная форма витамина C", &[], GREEN),
    seed("Magnesium Ascorbyl Phosphate", "Магний аскорбилфосфат", Antioxidant, 0, 0, false, MEDIUM, &["vitamin_c", "brightening"], "Мягкая стабильная форма витамина C", &[], GREEN),
    seed("Tocopherol", "Токоферол", Antioxidant, 2, 0, false, MEDIUM, &[], "Витамин E, защищает от окисления", &[], GREEN),
    seed("Tocopheryl Acetate", "Токоферил ацетат", Antioxidant, 0, 0, false, LOW, &[], "Стабильный эфир витамина E", &[], GREEN),
    seed("Ferulic Acid", "Феруловая кислота", Antioxidant, 0, 0, false, HIGH, &["anti_aging"], "Антиоксидант, усиливает действие витаминов C и E", &[], GREEN),
    seed("Resveratrol", "Ресвератрол", Antioxidant, 0, 0, false, MEDIUM, &["anti_aging"], "Растительный антиоксидант", &[], GREEN),
    seed("Panthenol", "Пантенол", Soothing, 0, 0, false, MEDIUM, &["soothing"], "Провитамин B5, успокаивает и восстанавливает кожу", &[], GREEN),
    seed("Allantoin", "Аллантоин", Soothing, 0, 0, false, MEDIUM, &["soothing"], "Успокаивает раздражение, ускоряет заживление", &[], GREEN),
    seed("Bisabolol", "Бисаболол", Soothing, 0, 0, false, MEDIUM, &["soothing"], "Компонент ромашки, снимает воспаление", &[], GREEN),
    seed("Madecassoside", "Мадекассозид", Soothing, 0, 0, false, HIGH, &["soothing"], "Активный компонент центеллы, восстанавливает барьер", &[], GREEN),
    seed("Centella Asiatica Extract", "Экстракт центеллы азиатской", Soothing, 0, 0, false, MEDIUM, &["soothing"], "Успокаивает и ускоряет восстановление кожи", &[], GREEN),
    seed("Caffeine", "Кофеин", Active, 0, 0, false, MEDIUM, &[], "Тонизирует, уменьшает отёчность", &[], GREEN),
    seed("Copper Tripeptide-1", "Медный трипептид-1", Active, 0, 0, false, HIGH, &["peptides", "anti_aging"], "Пептид меди, стимулирует восстановление кожи", &[], GREEN),
    seed("Palmitoyl Tripeptide-1", "Пальмитоил трипептид-1", Active, 0, 0, false, MEDIUM, &["peptides", "anti_aging"], "Сигнальный пептид, стимулирует синтез коллагена", &[], GREEN),
    seed("Acetyl Hexapeptide-8", "Ацетил гексапептид-8", Active, 0, 0, false, MEDIUM, &["peptides", "anti_aging"], "Пептид, смягчающий мимические морщины", &[], GREEN),
    seed("Ceramide NP", "Керамид NP", Emollient, 0, 0, false, HIGH, &[], "Липид кожного барьера", &[], GREEN),
    seed("Squalane", "Сквалан", Emollient, 1, 0, false, MEDIUM, &[], "Лёгкий эмолент, аналог липидов кожи", &[], GREEN),
    seed("Azelaic Acid", "Азелаиновая кислота", Active, 0, 1, false, HIGH, &["acne_fighter", "anti_pigmentation", "brightening"], "Борется с акне, розацеа и пигментацией", &[], GREEN),
    seed("Alpha-Arbutin", "Альфа-арбутин", Active, 0, 0, false, HIGH, &["brightening", "anti_pigmentation"], "Осветляет пигментные пятна", &[], GREEN),
    seed("Arbutin", "Арбутин", Active, 0, 0, false, MEDIUM, &["brightening", "anti_pigmentation"], "Осветляющий компонент растительного происхождения", &[], GREEN),
    seed("Kojic Acid", "Койевая кислота", Active, 0, 2, true, MEDIUM, &["brightening", "anti_pigmentation"], "Подавляет выработку меланина", &["Может вызвать раздражение"], YELLOW),
    seed("Tranexamic Acid", "Транексамовая кислота", Active, 0, 0, false, HIGH, &["brightening", "anti_pigmentation"], "Осветляет пигментацию и мелазму", &[], GREEN),
    seed("Hydroquinone", "Гидрохинон", Active, 0, 3, false, HIGH, &["brightening", "anti_pigmentation", "restricted"], "Сильный осветлитель, запрещён в косметике ЕС", &["Запрещён в косметике ЕС", "Может вызвать раздражение"], RED),
    seed("Benzoyl Peroxide", "Бензоилпероксид", Active, 0, 3, false, HIGH, &["acne_fighter", "drying"], "Антибактериальное средство против акне", &["Может вызвать сухость и раздражение"], YELLOW),
    seed("Sulfur", "Сера", Active, 0, 2, false, MEDIUM, &["acne_fighter", "drying"], "Подсушивает воспаления", &[], YELLOW),
    // Acids
    seed("Salicylic Acid", "Салициловая кислота", Exfoliant, 0, 2, false, HIGH, &["acids", "bha", "acne_fighter"], "BHA-кислота, очищает поры", PHOTOSENSITIVITY, GREEN),
    seed("Glycolic Acid", "Гликолевая кислота", Exfoliant, 0, 3, false, HIGH, &["acids", "aha", "anti_aging", "brightening"], "AHA-кислота, обновляет верхний слой кожи", SPF_AND_IRRITATION, YELLOW),
    seed("Lactic Acid", "Молочная кислота", Exfoliant, 0, 2, false, HIGH, &["acids", "aha", "moisturizing"], "Мягкая AHA-кислота с увлажняющим действием", PHOTOSENSITIVITY, GREEN),
    seed("Mandelic Acid", "Миндальная кислота", Exfoliant, 0, 1, false, MEDIUM, &["acids", "aha", "acne_fighter"], "Мягкая AHA-кислота для чувствительной кожи", PHOTOSENSITIVITY, GREEN),
    seed("Gluconolactone", "Глюконолактон", Exfoliant, 0, 0, false, MEDIUM, &["acids", "pha"], "PHA-кислота, деликатное отшелушивание", &[], GREEN),
    seed("Lactobionic Acid", "Лактобионовая кислота", Exfoliant, 0, 0, false, MEDIUM, &["acids", "pha"], "PHA-кислота с антиоксидантным действием", &[], GREEN),
    seed("Citric Acid", "Лимонная кислота", PhAdjuster, 0, 1, false, NEUTRAL, &[], "Регулирует pH средства", &[], GREEN),
    // Emollients and occlusives
    seed("Cetyl Alcohol", "Цетиловый спирт", Emollient, 2, 0, false, LOW, &["alcohol", "fatty_alcohol"], "Жирный спирт, смягчает и стабилизирует эмульсию", &[], GREEN),
    seed("Cetearyl Alcohol", "Цетеариловый спирт", Emollient, 2, 0, false, LOW, &["alcohol", "fatty_alcohol"], "Жирный спирт, эмолент и загуститель", &[], GREEN),
    seed("Stearyl Alcohol", "Стеариловый спирт", Emollient, 2, 0, false, LOW, &["alcohol", "fatty_alcohol"], "Жирный спирт, смягчает кожу", &[], GREEN),
    seed("Isopropyl Myristate", "Изопропилмиристат", Emollient, 5, 1, false, LOW, &[], "Лёгкий эмолент с высокой комедогенностью", &["Высокая комедогенность"], YELLOW),
    seed("Isopropyl Palmitate", "Изопропилпальмитат", Emollient, 4, 1, false, LOW, &[], "Эмолент, может забивать поры", &["Высокая комедогенность"], YELLOW),
    seed("Caprylic/Capric Triglyceride", "Каприлик/каприк триглицерид", Emollient, 1, 0, false, LOW, &[], "Лёгкий эмолент из кокосового масла", &[], GREEN),
    seed("Coconut Oil", "Кокосовое масло", Emollient, 4, 0, false, LOW, &["occlusive"], "Питательное масло, комедогенно", &["Высокая комедогенность"], YELLOW),
    seed("Cocos Nucifera Oil", "Масло кокоса", Emollient, 4, 0, false, LOW, &["occlusive"], "Питательное масло, комедогенно", &["Высокая комедогенность"], YELLOW),
    seed("Jojoba Oil", "Масло жожоба", Emollient, 2, 0, false, MEDIUM, &[], "Жидкий воск, близкий к кожному себуму", &[], GREEN),
    seed("Argania Spinosa Kernel Oil", "Масло арганы", Emollient, 0, 0, false, MEDIUM, &[], "Питательное масло, богатое витамином E", &[], GREEN),
    seed("Shea Butter", "Масло ши", Emollient, 0, 0, false, MEDIUM, &["occlusive"], "Плотное питательное масло", &[], GREEN),
    seed("Butyrospermum Parkii Butter", "Масло ши (карите)", Emollient, 0, 0, false, MEDIUM, &["occlusive"], "Плотное питательное масло", &[], GREEN),
    seed("Rosehip Oil", "Масло шиповника", Emollient, 1, 0, false, MEDIUM, &["anti_aging"], "Масло, богатое ненасыщенными жирными кислотами", &[], GREEN),
    seed("Olea Europaea Fruit Oil", "Оливковое масло", Emollient, 2, 0, false, LOW, &[], "Смягчающее масло", &[], GREEN),
    seed("Helianthus Annuus Seed Oil", "Подсолнечное масло", Emollient, 0, 0, false, LOW, &[], "Лёгкое масло, богатое линолевой кислотой", &[], GREEN),
    seed("Mineral Oil", "Минеральное масло", Occlusive, 2, 0, false, LOW, &["occlusive"], "Продукт нефтепереработки, создаёт плёнку", &[], GRAY),
    seed("Paraffinum Liquidum", "Жидкий парафин", Occlusive, 2, 0, false, LOW, &["occlusive"], "Минеральное масло, создаёт плёнку на коже", &[], GRAY),
    seed("Petrolatum", "Вазелин", Occlusive, 1, 0, false, MEDIUM, &["occlusive"], "Плотный окклюзив, предотвращает потерю влаги", &[], GREEN),
    seed("Lanolin", "Ланолин", Emollient, 2, 1, true, MEDIUM, &["occlusive", "allergen"], "Животный воск из овечьей шерсти", &["Потенциальный аллерген"], YELLOW),
    seed("Cera Alba", "Пчелиный воск", Occlusive, 2, 0, false, LOW, &["occlusive"], "Натуральный воск, создаёт защитную плёнку", &[], GREEN),
    // Silicones
    seed("Dimethicone", "Диметикон", Emollient, 1, 0, false, LOW, &["silicones"], "Силикон, создаёт гладкость и защитную плёнку", &[], GREEN),
    seed("Cyclopentasiloxane", "Циклопентасилоксан", Emollient, 0, 0, false, LOW, &["silicones", "restricted"], "Летучий силикон, ограничен в смываемых средствах ЕС", &["Имеет ограничения по использованию"], YELLOW),
    seed("Cyclohexasiloxane", "Циклогексасилоксан", Emollient, 0, 0, false, LOW, &["silicones"], "Летучий силикон", &[], GREEN),
    seed("Amodimethicone", "Амодиметикон", Emollient, 0, 0, false, LOW, &["silicones"], "Кондиционирующий силикон", &[], GREEN),
    seed("Phenyl Trimethicone", "Фенилтриметикон", Emollient, 0, 0, false, LOW, &["silicones"], "Силикон, придаёт блеск", &[], GREEN),
    // Emulsifiers and thickeners
    seed("Glyceryl Stearate", "Глицерил стеарат", Emulsifier, 1, 0, false, NEUTRAL, &[], "Эмульгатор и эмолент", &[], GREEN),
    seed("Polysorbate 20", "Полисорбат 20", Emulsifier, 0, 0, false, NEUTRAL, &[], "Солюбилизатор", &[], GREEN),
    seed("Polysorbate 80", "Полисорбат 80", Emulsifier, 0, 0, false, NEUTRAL, &[], "Эмульгатор", &[], GREEN),
    seed("Ceteareth-20", "Цетеарет-20", Emulsifier, 0, 1, false, NEUTRAL, &[], "Этоксилированный эмульгатор", &[], GRAY),
    seed("PEG-100 Stearate", "ПЭГ-100 стеарат", Emulsifier, 0, 0, false, NEUTRAL, &[], "Эмульгатор", &[], GRAY),
    seed("Lecithin", "Лецитин", Emulsifier, 0, 0, false, LOW, &[], "Натуральный эмульгатор", &[], GREEN),
    seed("Carbomer", "Карбомер", Thickener, 0, 0, false, NEUTRAL, &[], "Гелеобразователь", &[], GREEN),
    seed("Xanthan Gum", "Ксантановая камедь", Thickener, 0, 0, false, NEUTRAL, &[], "Натуральный загуститель", &[], GREEN),
    seed("Hydroxyethylcellulose", "Гидроксиэтилцеллюлоза", Thickener, 0, 0, false, NEUTRAL, &[], "Загуститель на основе целлюлозы", &[], GREEN),
    // pH, chelating, fillers
    seed("Sodium Hydroxide", "Гидроксид натрия", PhAdjuster, 0, 1, false, NEUTRAL, &[], "Регулирует pH", &[], GREEN),
    seed("Triethanolamine", "Триэтаноламин", PhAdjuster, 0, 1, true, NEUTRAL, &[], "Регулятор pH", &["Может вызвать раздражение"], YELLOW),
    seed("Disodium EDTA", "Динатрий ЭДТА", Chelating, 0, 0, false, NEUTRAL, &[], "Связывает ионы металлов", &[], GREEN),
    seed("Sodium Chloride", "Хлорид натрия", Thickener, 0, 0, false, NEUTRAL, &[], "Соль, загущает ПАВ-системы", &[], GRAY),
    seed("Talc", "Тальк", Base, 0, 0, false, NEUTRAL, &[], "Минеральный наполнитель", &[], GRAY),
    seed("Kaolin", "Каолин", Base, 0, 0, false, LOW, &[], "Белая глина, абсорбирует себум", &[], GREEN),
    seed("Bentonite", "Бентонит", Base, 0, 0, false, LOW, &["drying"], "Глина, очищает поры", &[], GREEN),
    seed("Collagen", "Коллаген", Humectant, 0, 0, false, MARKETING, &[], "Плёнкообразующий белок, не проникает в кожу", &[], GRAY),
    seed("Hydrolyzed Collagen", "Гидролизат коллагена", Humectant, 0, 0, false, MARKETING, &[], "Увлажняющий белок", &[], GRAY),
    // Preservatives
    seed("Phenoxyethanol", "Феноксиэтанол", Preservative, 0, 1, false, NEUTRAL, &[], "Распространённый консервант, безопасен до 1%", &[], GREEN),
    seed("Ethylhexylglycerin", "Этилгексилглицерин", Preservative, 0, 0, false, NEUTRAL, &[], "Усиливает действие консервантов", &[], GREEN),
    seed("Sodium Benzoate", "Бензоат натрия", Preservative, 0, 0, false, NEUTRAL, &[], "Пищевой консервант", &[], GREEN),
    seed("Potassium Sorbate", "Сорбат калия", Preservative, 0, 0, false, NEUTRAL, &[], "Мягкий консервант", &[], GREEN),
    seed("Methylparaben", "Метилпарабен", Preservative, 0, 0, false, NEUTRAL, &["parabens"], "Парабен, эффективный консервант", PARABEN_WARNINGS, YELLOW),
    seed("Propylparaben", "Пропилпарабен", Preservative, 0, 1, false, NEUTRAL, &["parabens", "restricted"], "Парабен, ограничен в ЕС", &["Парабен — спорный консервант", "Имеет ограничения по использованию"], YELLOW),
    seed("Butylparaben", "Бутилпарабен", Preservative, 0, 1, false, NEUTRAL, &["parabens", "restricted"], "Парабен, ограничен в ЕС", &["Парабен — спорный консервант", "Имеет ограничения по использованию"], RED),
    seed("DMDM Hydantoin", "ДМДМ гидантоин", Preservative, 0, 2, true, NEUTRAL, &["formaldehyde_releaser"], "Консервант-донор формальдегида", FORMALDEHYDE, RED),
    seed("Imidazolidinyl Urea", "Имидазолидинилмочевина", Preservative, 0, 2, true, NEUTRAL, &["formaldehyde_releaser"], "Консервант-донор формальдегида", FORMALDEHYDE, RED),
    seed("Diazolidinyl Urea", "Диазолидинилмочевина", Preservative, 0, 2, true, NEUTRAL, &["formaldehyde_releaser"], "Консервант-донор формальдегида", FORMALDEHYDE, RED),
    seed("Methylisothiazolinone", "Метилизотиазолинон", Preservative, 0, 3, true, NEUTRAL, &["restricted", "allergen"], "Сильный аллерген, запрещён в несмываемых средствах ЕС", &["Сильный аллерген"], RED),
    seed("Triclosan", "Триклозан", Preservative, 0, 1, false, NEUTRAL, &["restricted"], "Антибактериальный агент с ограничениями", &["Имеет ограничения по использованию"], RED),
    // Surfactants
    seed("Sodium Lauryl Sulfate", "Лаурилсульфат натрия", Surfactant, 0, 4, false, NEUTRAL, &["sls", "drying"], "Агрессивный ПАВ", HARSH_SURFACTANT, RED),
    seed("Sodium Laureth Sulfate", "Лауретсульфат натрия", Surfactant, 0, 2, false, NEUTRAL, &["sles"], "ПАВ, мягче SLS", &["Может вызвать раздражение"], YELLOW),
    seed("Cocamidopropyl Betaine", "Кокамидопропил бетаин", Surfactant, 0, 1, true, NEUTRAL, &[], "Мягкий амфотерный ПАВ", &[], GREEN),
    seed("Coco-Glucoside", "Коко-глюкозид", Surfactant, 0, 0, false, NEUTRAL, &[], "Мягкий растительный ПАВ", &[], GREEN),
    seed("Decyl Glucoside", "Децил глюкозид", Surfactant, 0, 0, false, NEUTRAL, &[], "Мягкий растительный ПАВ", &[], GREEN),
    seed("Cocamide DEA", "Кокамид ДЭА", Surfactant, 0, 2, false, NEUTRAL, &["restricted"], "Пенообразователь с ограничениями", &["Имеет ограничения по использованию"], RED),
    // Sunscreens
    seed("Zinc Oxide", "Оксид цинка", Sunscreen, 1, 0, false, HIGH, &["spf"], "Минеральный УФ-фильтр широкого спектра", &[], GREEN),
    seed("Titanium Dioxide", "Диоксид титана", Sunscreen, 0, 0, false, HIGH, &["spf"], "Минеральный УФ-фильтр", &[], GREEN),
    seed("Avobenzone", "Авобензон", Sunscreen, 0, 1, false, HIGH, &["spf"], "Химический UVA-фильтр", &[], GREEN),
    seed("Octinoxate", "Октиноксат", Sunscreen, 0, 1, true, MEDIUM, &["spf"], "Химический UVB-фильтр", &["Потенциальный эндокринный дизраптор"], YELLOW),
    seed("Octocrylene", "Октокрилен", Sunscreen, 0, 1, true, MEDIUM, &["spf"], "Химический UV-фильтр", &["Потенциальный аллерген"], YELLOW),
    seed("Homosalate", "Гомосалат", Sunscreen, 0, 1, false, MEDIUM, &["spf", "restricted"], "Химический UVB-фильтр с ограничениями", &["Имеет ограничения по использованию"], YELLOW),
    // Fragrance and essential oils
    seed("Fragrance", "Отдушка", Fragrance, 0, 2, true, NEUTRAL, &["fragrance"], "Смесь ароматических веществ", FRAGRANCE_WARNINGS, YELLOW),
    seed("Linalool", "Линалоол", Fragrance, 0, 1, true, NEUTRAL, &["fragrance"], "Ароматический компонент", FRAGRANCE_ALLERGEN, YELLOW),
    seed("Limonene", "Лимонен", Fragrance, 0, 1, true, NEUTRAL, &["fragrance"], "Ароматический компонент цитрусовых", FRAGRANCE_ALLERGEN, YELLOW),
    seed("Citronellol", "Цитронеллол", Fragrance, 0, 1, true, NEUTRAL, &["fragrance"], "Ароматический компонент", FRAGRANCE_ALLERGEN, YELLOW),
    seed("Geraniol", "Гераниол", Fragrance, 0, 1, true, NEUTRAL, &["fragrance"], "Ароматический компонент", FRAGRANCE_ALLERGEN, YELLOW),
    seed("Tea Tree Oil", "Масло чайного дерева", Active, 0, 2, true, MEDIUM, &["essential_oils", "acne_fighter"], "Эфирное масло с антибактериальным действием", &["Может вызвать раздражение"], YELLOW),
    seed("Lavandula Angustifolia Oil", "Масло лаванды", Fragrance, 0, 2, true, LOW, &["essential_oils", "fragrance"], "Эфирное масло лаванды", &["Может вызвать раздражение"], YELLOW),
    seed("Eucalyptus Oil", "Масло эвкалипта", Fragrance, 0, 2, true, LOW, &["essential_oils", "fragrance"], "Эфирное масло эвкалипта", &["Может вызвать раздражение"], YELLOW),
    seed("Menthol", "Ментол", Soothing, 0, 2, false, LOW, &["essential_oils"], "Охлаждающий компонент мяты", &["Может вызвать раздражение"], YELLOW),
    // Plant extracts
    seed("Camellia Sinensis Leaf Extract", "Экстракт зелёного чая", Antioxidant, 0, 0, false, MEDIUM, &["soothing"], "Антиоксидант, успокаивает кожу", &[], GREEN),
    seed("Aloe Barbadensis Leaf Juice", "Сок алоэ вера", Soothing, 0, 0, false, MEDIUM, &["soothing", "moisturizing"], "Успокаивает и увлажняет", &[], GREEN),
    seed("Aloe Barbadensis Leaf Extract", "Экстракт алоэ вера", Soothing, 0, 0, false, MEDIUM, &["soothing"], "Успокаивающий экстракт", &[], GREEN),
    seed("Glycyrrhiza Glabra Root Extract", "Экстракт корня солодки", Active, 0, 0, false, MEDIUM, &["brightening", "soothing"], "Осветляет и успокаивает", &[], GREEN),
    seed("Chamomilla Recutita Extract", "Экстракт ромашки", Soothing, 0, 1, true, LOW, &["soothing"], "Успокаивающий экстракт", &[], GREEN),
    seed("Snail Secretion Filtrate", "Муцин улитки", Active, 0, 0, false, MEDIUM, &["moisturizing"], "Увлажняет и восстанавливает кожу", &[], GREEN),
    seed("Witch Hazel", "Гамамелис", Active, 0, 2, false, LOW, &["drying"], "Вяжущий экстракт, часто содержит спирт", &[], YELLOW),
];

/// Alternative INCI spellings resolving to a canonical registry row.
pub const ALIASES: &[(&str, &str)] = &[
    ("Aqua", "Water"),
    ("Eau", "Water"),
    ("Parfum", "Fragrance"),
    ("Perfume", "Fragrance"),
    ("Aroma", "Fragrance"),
    ("Alcohol Denat.", "Alcohol Denat"),
    ("SD Alcohol", "Alcohol Denat"),
    ("Vitamin C", "Ascorbic Acid"),
    ("Vitamin E", "Tocopherol"),
    ("Vitamin A", "Retinol"),
    ("Argan Oil", "Argania Spinosa Kernel Oil"),
    ("Aloe Vera", "Aloe Barbadensis Leaf Juice"),
    ("Dexpanthenol", "Panthenol"),
    ("Simmondsia Chinensis Seed Oil", "Jojoba Oil"),
    ("Melaleuca Alternifolia Leaf Oil", "Tea Tree Oil"),
    ("Hamamelis Virginiana Water", "Witch Hazel"),
];
