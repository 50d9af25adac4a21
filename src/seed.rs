/*!
 * Embedded seed data for the dictionary.
 *
 * The dictionary is a fixed, hand-curated dataset: six Cameroonian
 * languages, twenty-four vocabulary categories, and the full set of
 * French-to-target translation rows. Rows are plain tuples so the tables
 * below stay close to the curated word lists they were transcribed from.
 */

/// Language row: (id, name, family, region, speakers, description, iso_code)
pub type LanguageRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i64,
    &'static str,
    &'static str,
);

/// Category row: (id, name, description)
pub type CategoryRow = (&'static str, &'static str, &'static str);

/// Translation row: (french, language_id, translation, category_id, pronunciation, difficulty).
/// Usage notes are not curated yet, so the loader inserts NULL for that column.
pub type TranslationRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

/// The six languages covered by the dictionary
pub const LANGUAGES: &[LanguageRow] = &[
    (
        "EWO",
        "Ewondo",
        "Beti-Pahuin (Bantu)",
        "Central Region",
        577_000,
        "Principal language of the Beti people, widely spoken in Yaoundé",
        "ewo",
    ),
    (
        "DUA",
        "Duala",
        "Coastal Bantu",
        "Littoral Region",
        300_000,
        "Historic trading language of the coast",
        "dua",
    ),
    (
        "FEF",
        "Fe'efe'e",
        "Grassfields (Bamileke)",
        "West Region",
        200_000,
        "Language of the Bafang area",
        "fef",
    ),
    (
        "FUL",
        "Fulfulde",
        "Niger-Congo (Atlantic)",
        "North Region",
        1_500_000,
        "Language of the Fulani people",
        "ful",
    ),
    (
        "BAS",
        "Bassa",
        "A40 Bantu",
        "Central-Littoral",
        230_000,
        "Language of the Bassa people",
        "bas",
    ),
    (
        "BAM",
        "Bamum",
        "Grassfields",
        "West Region",
        215_000,
        "Language with its own indigenous script",
        "bax",
    ),
];

/// The twenty-four vocabulary categories
pub const CATEGORIES: &[CategoryRow] = &[
    ("GRT", "Greetings", "Basic greetings and polite expressions"),
    ("NUM", "Numbers", "Cardinal and ordinal numbers"),
    ("FAM", "Family", "Family members and relationships"),
    ("FOD", "Food", "Food items and cooking terms"),
    ("BOD", "Body", "Body parts and health"),
    ("TIM", "Time", "Time expressions, days, months"),
    ("COL", "Colors", "Color names"),
    ("ANI", "Animals", "Animals and wildlife"),
    ("NAT", "Nature", "Natural elements, weather"),
    ("VRB", "Verbs", "Common action words"),
    ("ADJ", "Adjectives", "Descriptive words"),
    ("PHR", "Phrases", "Common phrases and expressions"),
    ("CLO", "Clothing", "Clothing and accessories"),
    ("HOM", "Home", "House, furniture, household items"),
    ("PRO", "Professions", "Jobs and occupations"),
    ("TRA", "Transportation", "Vehicles and travel"),
    ("EMO", "Emotions", "Feelings and emotions"),
    ("EDU", "Education", "School and learning"),
    ("HEA", "Health", "Medical and health terms"),
    ("MON", "Money", "Currency, shopping, business"),
    ("DIR", "Directions", "Location and movement"),
    ("REL", "Religion", "Spiritual and religious terms"),
    ("MUS", "Music", "Musical instruments and terms"),
    ("SPO", "Sports", "Sports and physical activities"),
];

/// The full curated translation set
#[rustfmt::skip]
pub const TRANSLATIONS: &[TranslationRow] = &[
    // Greetings - Ewondo
    ("Bonjour", "EWO", "Mbolo", "GRT", "mm-BOH-loh", "beginner"),
    ("Bonsoir", "EWO", "Mbolo", "GRT", "mm-BOH-loh", "beginner"),
    ("Comment allez-vous?", "EWO", "Mbolo woe?", "GRT", "mm-BOH-loh woh-eh", "beginner"),
    ("Merci", "EWO", "Akiba", "GRT", "ah-KEE-bah", "beginner"),
    ("Au revoir", "EWO", "Ka yen asu", "GRT", "kah yehn ah-SOO", "beginner"),
    ("Excuse-moi", "EWO", "Ma yem ve", "GRT", "mah yehm veh", "beginner"),

    // Greetings - Duala
    ("Bonjour", "DUA", "Mwa boma", "GRT", "mwah BOH-mah", "beginner"),
    ("Bonsoir", "DUA", "Mwa munyenge", "GRT", "mwah moon-YEHN-geh", "beginner"),
    ("Comment allez-vous?", "DUA", "Mwa boma na nde?", "GRT", "mwah BOH-mah nah n-deh", "beginner"),
    ("Merci", "DUA", "Masa", "GRT", "MAH-sah", "beginner"),
    ("Au revoir", "DUA", "Wese", "GRT", "WEH-seh", "beginner"),

    // Greetings - Fe'efe'e
    ("Bonjour", "FEF", "Kweni", "GRT", "KWEH-nee", "beginner"),
    ("Merci", "FEF", "Ndongui", "GRT", "n-DOHN-gwee", "beginner"),
    ("Au revoir", "FEF", "Ko'a ntsie", "GRT", "koh-ah n-TSEE-eh", "beginner"),

    // Greetings - Fulfulde
    ("Bonjour", "FUL", "Jam waali", "GRT", "jahm WAH-lee", "beginner"),
    ("Bonsoir", "FUL", "Jam mayra", "GRT", "jahm MY-rah", "beginner"),
    ("Comment allez-vous?", "FUL", "Jam tan?", "GRT", "jahm tahn", "beginner"),
    ("Merci", "FUL", "Jarama", "GRT", "jah-RAH-mah", "beginner"),
    ("Au revoir", "FUL", "Selaamaleykum", "GRT", "seh-lah-ah-mah-LAY-koom", "beginner"),

    // Greetings - Bassa
    ("Bonjour", "BAS", "Mbolo", "GRT", "mm-BOH-loh", "beginner"),
    ("Merci", "BAS", "Nyango", "GRT", "NYAHN-goh", "beginner"),
    ("Au revoir", "BAS", "Ka nganda", "GRT", "kah n-GAHN-dah", "beginner"),

    // Greetings - Bamum
    ("Bonjour", "BAM", "Nshie", "GRT", "n-SHEE-eh", "beginner"),
    ("Merci", "BAM", "Numeni", "GRT", "noo-MEH-nee", "beginner"),
    ("Au revoir", "BAM", "Ka ben", "GRT", "kah behn", "beginner"),

    // Numbers - Ewondo
    ("un", "EWO", "fok", "NUM", "fohk", "beginner"),
    ("deux", "EWO", "iba", "NUM", "ee-BAH", "beginner"),
    ("trois", "EWO", "ilal", "NUM", "ee-LAHL", "beginner"),
    ("quatre", "EWO", "inai", "NUM", "ee-NAH-ee", "beginner"),
    ("cinq", "EWO", "itan", "NUM", "ee-TAHN", "beginner"),
    ("six", "EWO", "isamaan", "NUM", "ee-sah-MAHN", "beginner"),
    ("sept", "EWO", "isambaal", "NUM", "ee-sahm-BAHL", "beginner"),
    ("huit", "EWO", "mfom", "NUM", "mm-FOHM", "beginner"),
    ("neuf", "EWO", "evus", "NUM", "eh-VOOS", "beginner"),
    ("dix", "EWO", "awom", "NUM", "ah-WOHM", "beginner"),

    // Numbers - Duala
    ("un", "DUA", "mosi", "NUM", "MOH-see", "beginner"),
    ("deux", "DUA", "maba", "NUM", "mah-BAH", "beginner"),
    ("trois", "DUA", "malalo", "NUM", "mah-LAH-loh", "beginner"),
    ("quatre", "DUA", "manei", "NUM", "mah-NEH-ee", "beginner"),
    ("cinq", "DUA", "matan", "NUM", "mah-TAHN", "beginner"),
    ("six", "DUA", "motoba", "NUM", "moh-TOH-bah", "beginner"),
    ("sept", "DUA", "nsamba", "NUM", "n-SAHM-bah", "beginner"),
    ("huit", "DUA", "mwambe", "NUM", "mwahm-BEH", "beginner"),
    ("neuf", "DUA", "libua", "NUM", "lee-BOO-ah", "beginner"),
    ("dix", "DUA", "duom", "NUM", "DOO-ohm", "beginner"),

    // Numbers - Fulfulde
    ("un", "FUL", "goto", "NUM", "GOH-toh", "beginner"),
    ("deux", "FUL", "didi", "NUM", "DEE-dee", "beginner"),
    ("trois", "FUL", "tati", "NUM", "TAH-tee", "beginner"),
    ("quatre", "FUL", "nayi", "NUM", "NAH-yee", "beginner"),
    ("cinq", "FUL", "jowi", "NUM", "JOH-wee", "beginner"),
    ("six", "FUL", "jeegom", "NUM", "JEH-eh-gohm", "beginner"),
    ("sept", "FUL", "jeeditati", "NUM", "jeh-eh-dee-TAH-tee", "beginner"),
    ("huit", "FUL", "jeetati", "NUM", "jeh-eh-TAH-tee", "beginner"),
    ("neuf", "FUL", "jeenayi", "NUM", "jeh-eh-NAH-yee", "beginner"),
    ("dix", "FUL", "sappo", "NUM", "SAHP-poh", "beginner"),

    // Family - Ewondo
    ("père", "EWO", "tara", "FAM", "TAH-rah", "beginner"),
    ("mère", "EWO", "nga", "FAM", "n-GAH", "beginner"),
    ("fils", "EWO", "moan minga", "FAM", "moh-AHN mee-n-GAH", "beginner"),
    ("fille", "EWO", "moan minga", "FAM", "moh-AHN mee-n-GAH", "beginner"),
    ("frère", "EWO", "nkuu", "FAM", "n-KOO", "beginner"),
    ("sœur", "EWO", "mbok", "FAM", "mm-BOHK", "beginner"),
    ("grand-père", "EWO", "nkukuma", "FAM", "n-koo-KOO-mah", "beginner"),
    ("grand-mère", "EWO", "nnemekukuma", "FAM", "n-neh-meh-koo-KOO-mah", "beginner"),

    // Family - Duala
    ("père", "DUA", "tata", "FAM", "TAH-tah", "beginner"),
    ("mère", "DUA", "mama", "FAM", "MAH-mah", "beginner"),
    ("fils", "DUA", "mwana ma mutu", "FAM", "mwah-nah mah moo-TOO", "beginner"),
    ("fille", "DUA", "mwana ma mutu", "FAM", "mwah-nah mah moo-TOO", "beginner"),
    ("frère", "DUA", "kaka", "FAM", "KAH-kah", "beginner"),
    ("sœur", "DUA", "mba", "FAM", "mm-BAH", "beginner"),

    // Family - Fulfulde
    ("père", "FUL", "baaba", "FAM", "BAH-bah", "beginner"),
    ("mère", "FUL", "yaaya", "FAM", "YAH-yah", "beginner"),
    ("fils", "FUL", "bii'do", "FAM", "bee-DOH", "beginner"),
    ("fille", "FUL", "deb'ere", "FAM", "deh-BEH-reh", "beginner"),
    ("frère", "FUL", "ka'o", "FAM", "kah-OH", "beginner"),
    ("sœur", "FUL", "mba'ru", "FAM", "mm-BAH-roo", "beginner"),

    // Food - Ewondo
    ("eau", "EWO", "mam", "FOD", "mahm", "beginner"),
    ("nourriture", "EWO", "bidi", "FOD", "BEE-dee", "beginner"),
    ("viande", "EWO", "nyama", "FOD", "NYAH-mah", "beginner"),
    ("poisson", "EWO", "som", "FOD", "sohm", "beginner"),
    ("légumes", "EWO", "nduma", "FOD", "n-DOO-mah", "beginner"),
    ("banane", "EWO", "kaba", "FOD", "KAH-bah", "beginner"),
    ("manioc", "EWO", "mbong", "FOD", "mm-BOHN", "beginner"),
    ("riz", "EWO", "malaa", "FOD", "mah-LAH", "beginner"),

    // Food - Duala
    ("eau", "DUA", "mema", "FOD", "MEH-mah", "beginner"),
    ("nourriture", "DUA", "bele", "FOD", "BEH-leh", "beginner"),
    ("viande", "DUA", "nyama", "FOD", "NYAH-mah", "beginner"),
    ("poisson", "DUA", "mba", "FOD", "mm-BAH", "beginner"),
    ("banane", "DUA", "kondo", "FOD", "KOHN-doh", "beginner"),
    ("manioc", "DUA", "miondo", "FOD", "mee-OHN-doh", "beginner"),

    // Food - Fulfulde
    ("eau", "FUL", "ndiyam", "FOD", "n-DEE-yahm", "beginner"),
    ("nourriture", "FUL", "yiiyam", "FOD", "YEE-yahm", "beginner"),
    ("viande", "FUL", "nebbe", "FOD", "NEH-beh", "beginner"),
    ("lait", "FUL", "kosam", "FOD", "KOH-sahm", "beginner"),
    ("mil", "FUL", "gawri", "FOD", "GAH-wree", "beginner"),

    // Common Phrases - Ewondo
    ("Je ne comprends pas", "EWO", "Ma si nkoboo te", "PHR", "mah see n-koh-BOH teh", "intermediate"),
    ("Où est...?", "EWO", "Woe ve...?", "PHR", "woh-eh veh", "intermediate"),
    ("Combien ça coûte?", "EWO", "A nkom mbeni?", "PHR", "ah n-kohm mm-BEH-nee", "intermediate"),
    ("Je m'appelle...", "EWO", "Ma yili...", "PHR", "mah YEE-lee", "intermediate"),
    ("Parlez-vous français?", "EWO", "Ou kala ndaman Fala?", "PHR", "oo KAH-lah n-dah-mahn FAH-lah", "intermediate"),

    // Common Phrases - Duala
    ("Je ne comprends pas", "DUA", "Na soma te", "PHR", "nah SOH-mah teh", "intermediate"),
    ("Où est...?", "DUA", "Wapi...?", "PHR", "WAH-pee", "intermediate"),
    ("Combien ça coûte?", "DUA", "Mbama ngando?", "PHR", "mm-BAH-mah n-GAHN-doh", "intermediate"),
    ("Je m'appelle...", "DUA", "Ndina nyam na...", "PHR", "n-DEE-nah nyahm nah", "intermediate"),

    // Common Phrases - Fulfulde
    ("Je ne comprends pas", "FUL", "Mi famaani", "PHR", "mee fah-MAH-nee", "intermediate"),
    ("Où est...?", "FUL", "Anto...?", "PHR", "AHN-toh", "intermediate"),
    ("Combien ça coûte?", "FUL", "Noy foti?", "PHR", "noy FOH-tee", "intermediate"),
    ("Je m'appelle...", "FUL", "Innde am ko...", "PHR", "ee-n-DEH ahm koh", "intermediate"),

    // Colors - Ewondo
    ("rouge", "EWO", "bibuk", "COL", "bee-BOOK", "beginner"),
    ("blanc", "EWO", "fum", "COL", "foom", "beginner"),
    ("noir", "EWO", "mvie", "COL", "mm-VEE-eh", "beginner"),
    ("vert", "EWO", "esu", "COL", "eh-SOO", "beginner"),
    ("bleu", "EWO", "belu", "COL", "BEH-loo", "beginner"),
    ("jaune", "EWO", "bola", "COL", "BOH-lah", "beginner"),

    // Colors - Duala
    ("rouge", "DUA", "nene", "COL", "NEH-neh", "beginner"),
    ("blanc", "DUA", "mpemba", "COL", "mm-PEHM-bah", "beginner"),
    ("noir", "DUA", "binde", "COL", "BEE-n-deh", "beginner"),
    ("vert", "DUA", "kaki", "COL", "KAH-kee", "beginner"),

    // Colors - Fulfulde
    ("rouge", "FUL", "boodeejo", "COL", "boh-DEH-joh", "beginner"),
    ("blanc", "FUL", "raneeji", "COL", "rah-NEH-jee", "beginner"),
    ("noir", "FUL", "baleejo", "COL", "bah-LEH-joh", "beginner"),

    // Animals - Ewondo
    ("chien", "EWO", "mvus", "ANI", "mm-VOOS", "beginner"),
    ("chat", "EWO", "pusi", "ANI", "POO-see", "beginner"),
    ("éléphant", "EWO", "nzog", "ANI", "n-ZOHG", "beginner"),
    ("lion", "EWO", "nkui", "ANI", "n-KOO-ee", "beginner"),
    ("oiseau", "EWO", "non", "ANI", "nohn", "beginner"),
    ("poule", "EWO", "kob", "ANI", "kohb", "beginner"),

    // Animals - Duala
    ("chien", "DUA", "mbwa", "ANI", "mm-BWAH", "beginner"),
    ("chat", "DUA", "paka", "ANI", "PAH-kah", "beginner"),
    ("éléphant", "DUA", "njoku", "ANI", "n-JOH-koo", "beginner"),
    ("oiseau", "DUA", "kake", "ANI", "KAH-keh", "beginner"),

    // Animals - Fulfulde
    ("chien", "FUL", "rawandu", "ANI", "rah-WAHN-doo", "beginner"),
    ("chat", "FUL", "ganyru", "ANI", "GAHN-yroo", "beginner"),
    ("vache", "FUL", "nagge", "ANI", "NAHG-geh", "beginner"),
    ("chèvre", "FUL", "buri", "ANI", "BOO-ree", "beginner"),
    ("mouton", "FUL", "barka", "ANI", "BAHR-kah", "beginner"),

    // Additional common words (expanded vocabulary)
    ("maison", "EWO", "nda", "HOM", "n-DAH", "beginner"),
    ("maison", "DUA", "ndako", "HOM", "n-DAH-koh", "beginner"),
    ("maison", "FUL", "galle", "HOM", "GAHL-leh", "beginner"),
    ("voiture", "EWO", "motor", "TRA", "MOH-tohr", "beginner"),
    ("voiture", "DUA", "motuka", "TRA", "moh-TOO-kah", "beginner"),
    ("voiture", "FUL", "motoor", "TRA", "moh-TOHR", "beginner"),
    ("école", "EWO", "kalara", "EDU", "kah-LAH-rah", "beginner"),
    ("école", "DUA", "eteyelo", "EDU", "eh-teh-YEH-loh", "beginner"),
    ("école", "FUL", "janngirde", "EDU", "jahn-GEER-deh", "beginner"),
    ("médecin", "EWO", "nkomo nnama", "HEA", "n-KOH-moh n-NAH-mah", "intermediate"),
    ("médecin", "DUA", "monganga", "HEA", "mohn-GAHN-gah", "intermediate"),
    ("médecin", "FUL", "doktoor", "HEA", "dohk-TOHR", "intermediate"),
    ("argent", "EWO", "osan", "MON", "oh-SAHN", "beginner"),
    ("argent", "DUA", "mbongo", "MON", "mm-BOHN-goh", "beginner"),
    ("argent", "FUL", "alkarfe", "MON", "ahl-KAHR-feh", "beginner"),
    ("soleil", "EWO", "nsan", "NAT", "n-SAHN", "beginner"),
    ("soleil", "DUA", "moi", "NAT", "MOH-ee", "beginner"),
    ("soleil", "FUL", "naange", "NAT", "NAHN-geh", "beginner"),
    ("lune", "EWO", "ngond", "NAT", "n-GOHND", "beginner"),
    ("lune", "DUA", "sanza", "NAT", "SAHN-zah", "beginner"),
    ("lune", "FUL", "lewru", "NAT", "LEH-wroo", "beginner"),
    ("pluie", "EWO", "mvon", "NAT", "mm-VOHN", "beginner"),
    ("pluie", "DUA", "mbula", "NAT", "mm-BOO-lah", "beginner"),
    ("pluie", "FUL", "ndiyam", "NAT", "n-DEE-yahm", "beginner"),
    ("feu", "EWO", "nduan", "NAT", "n-DOO-ahn", "beginner"),
    ("feu", "DUA", "moto", "NAT", "MOH-toh", "beginner"),
    ("feu", "FUL", "yiite", "NAT", "YEE-teh", "beginner"),
    ("eau", "BAS", "mam", "FOD", "mahm", "beginner"),
    ("eau", "BAM", "fù", "FOD", "foo", "beginner"),
    ("nourriture", "BAS", "bilong", "FOD", "bee-LOHNG", "beginner"),
    ("nourriture", "BAM", "shù", "FOD", "shoo", "beginner"),
    ("père", "BAS", "tata", "FAM", "TAH-tah", "beginner"),
    ("père", "BAM", "pa", "FAM", "pah", "beginner"),
    ("mère", "BAS", "nya", "FAM", "n-YAH", "beginner"),
    ("mère", "BAM", "mā", "FAM", "mah", "beginner"),
    ("un", "BAS", "mosi", "NUM", "MOH-see", "beginner"),
    ("un", "BAM", "pāq", "NUM", "pahk", "beginner"),
    ("deux", "BAS", "maba", "NUM", "mah-BAH", "beginner"),
    ("deux", "BAM", "tū", "NUM", "too", "beginner"),
    ("rouge", "BAS", "bibuk", "COL", "bee-BOOK", "beginner"),
    ("blanc", "BAS", "fum", "COL", "foom", "beginner"),
    ("noir", "BAS", "mvie", "COL", "mm-VEE-eh", "beginner"),
    ("chien", "BAS", "mvus", "ANI", "mm-VOOS", "beginner"),
    ("chat", "BAS", "pusi", "ANI", "POO-see", "beginner"),
    ("éléphant", "BAS", "nzog", "ANI", "n-ZOHG", "beginner"),
    ("Bonjour", "BAS", "Mbolo", "GRT", "mm-BOH-loh", "beginner"),
    ("Merci", "BAS", "Nyango", "GRT", "NYAHN-goh", "beginner"),
    ("Au revoir", "BAS", "Ka nganda", "GRT", "kah n-GAHN-dah", "beginner"),
    ("Bonjour", "BAM", "Nshie", "GRT", "n-SHEE-eh", "beginner"),
    ("Merci", "BAM", "Numeni", "GRT", "noo-MEH-nee", "beginner"),
    ("Au revoir", "BAM", "Ka ben", "GRT", "kah behn", "beginner"),

    // Additional words from enhanced dictionary and lessons
    ("Bonjour", "EWO", "Mboté", "GRT", "mm-BOH-teh", "beginner"),
    ("Bonjour", "EWO", "Mboté o bibóm", "GRT", "mm-BOH-teh oh bee-BOHM", "beginner"),
    ("Merci", "EWO", "Matónda", "GRT", "mah-TOHN-dah", "beginner"),
    ("Eau", "DUA", "Mam", "FOD", "mahm", "beginner"),
    ("Venir", "FEF", "Kaa", "VRB", "KAH-ah", "beginner"),
    ("Eau", "FUL", "Ndiyam", "FOD", "n-DEE-yahm", "beginner"),
    ("Maison", "BAS", "Hɔp", "HOM", "hohp", "beginner"),
    ("Roi", "BAM", "Nzi", "PRO", "n-ZEE", "intermediate"),
    ("Nourriture", "DUA", "Diba", "FOD", "DEE-bah", "beginner"),
    ("Argent", "DUA", "Mbongo", "MON", "mm-BOHN-goh", "beginner"),
    ("Père", "EWO", "Tara", "FAM", "TAH-rah", "beginner"),
    ("Mère", "EWO", "Mama", "FAM", "MAH-mah", "beginner"),
    ("Mère", "EWO", "Mam", "FAM", "mahm", "beginner"),
    ("Enfant", "EWO", "Ndomo", "FAM", "n-DOH-moh", "beginner"),
    ("Fils", "EWO", "Ndomo", "FAM", "n-DOH-moh", "beginner"),
    ("Fille", "EWO", "Ngon", "FAM", "n-GOHN", "beginner"),

    // Additional common words and phrases
    ("S'il vous plaît", "EWO", "Ta abe", "PHR", "tah ah-BEH", "intermediate"),
    ("Désolé", "EWO", "Ma yem ve", "PHR", "mah yehm veh", "intermediate"),
    ("Je suis malade", "EWO", "Ma yie nkono", "PHR", "mah YEE-eh n-KOH-noh", "intermediate"),
    ("Aidez-moi", "EWO", "Demedoo ma", "PHR", "deh-meh-DOH mah", "intermediate"),
    ("Je suis perdu", "EWO", "Ma fuman nzila", "PHR", "mah foo-MAHN n-ZEE-lah", "intermediate"),
    ("Quelle heure est-il?", "EWO", "Ngule so ve?", "PHR", "n-GOO-leh soh veh", "intermediate"),
    ("Je ne parle pas...", "EWO", "Ma si kala... te", "PHR", "mah see KAH-lah teh", "intermediate"),
    ("S'il vous plaît", "DUA", "Mbesa na yo", "PHR", "mm-BEH-sah nah yoh", "intermediate"),
    ("Désolé", "DUA", "Pardon", "PHR", "pahr-DOHN", "intermediate"),
    ("Je suis malade", "DUA", "Nazali na bokono", "PHR", "nah-ZAH-lee nah boh-KOH-noh", "intermediate"),
    ("Aidez-moi", "DUA", "Bosalisa ngai", "PHR", "boh-sah-LEE-sah n-GAH-ee", "intermediate"),
    ("Quelle heure est-il?", "DUA", "Ngonga nini?", "PHR", "n-GOHN-gah NEE-nee", "intermediate"),
    ("S'il vous plaît", "FUL", "Min jaɓɓii", "PHR", "meen jah-BEE", "intermediate"),
    ("Désolé", "FUL", "Hakke", "PHR", "HAHK-keh", "intermediate"),
    ("Je suis malade", "FUL", "Mi jogii", "PHR", "mee joh-GEE", "intermediate"),
    ("Aidez-moi", "FUL", "Wallu-mi", "PHR", "WAHL-loo-mee", "intermediate"),
    ("Quelle heure est-il?", "FUL", "Waktu fotde?", "PHR", "WAHK-too FOHT-deh", "intermediate"),

    // Extended vocabulary from lessons
    ("Bonjour", "EWO", "Mboté", "GRT", "mm-BOH-teh", "beginner"),
    ("Bonjour", "EWO", "Mboté o bibóm", "GRT", "mm-BOH-teh oh bee-BOHM", "beginner"),
    ("Merci", "EWO", "Matónda", "GRT", "mah-TOHN-dah", "beginner"),
    ("Père", "EWO", "Tara", "FAM", "TAH-rah", "beginner"),
    ("Mère", "EWO", "Mama", "FAM", "MAH-mah", "beginner"),
    ("Mère", "EWO", "Mam", "FAM", "mahm", "beginner"),
    ("Enfant", "EWO", "Ndomo", "FAM", "n-DOH-moh", "beginner"),
    ("Fils", "EWO", "Ndomo", "FAM", "n-DOH-moh", "beginner"),
    ("Fille", "EWO", "Ngon", "FAM", "n-GOHN", "beginner"),
    ("Eau", "DUA", "Mam", "FOD", "mahm", "beginner"),
    ("Nourriture", "DUA", "Diba", "FOD", "DEE-bah", "beginner"),
    ("Argent", "DUA", "Mbongo", "MON", "mm-BOHN-goh", "beginner"),

    // Body parts (extended)
    ("Tête", "EWO", "Nlo", "BOD", "n-LOH", "beginner"),
    ("Œil", "EWO", "Iso", "BOD", "ee-SOH", "beginner"),
    ("Oreille", "EWO", "To", "BOD", "toh", "beginner"),
    ("Nez", "EWO", "Minga", "BOD", "mee-n-GAH", "beginner"),
    ("Bouche", "EWO", "Anom", "BOD", "ah-NOHM", "beginner"),
    ("Dent", "EWO", "Nyin", "BOD", "n-YEEN", "beginner"),
    ("Main", "EWO", "Abo", "BOD", "ah-BOH", "beginner"),
    ("Pied", "EWO", "Aban", "BOD", "ah-BAHN", "beginner"),
    ("Bras", "EWO", "Abei", "BOD", "ah-BEH-ee", "beginner"),
    ("Jambe", "EWO", "Akok", "BOD", "ah-KOHK", "beginner"),
    ("Cœur", "EWO", "Nlem", "BOD", "n-LEHM", "beginner"),
    ("Estomac", "EWO", "Abe", "BOD", "ah-BEH", "beginner"),
    ("Tête", "DUA", "Moto", "BOD", "MOH-toh", "beginner"),
    ("Œil", "DUA", "Disu", "BOD", "DEE-soo", "beginner"),
    ("Oreille", "DUA", "Toi", "BOD", "toh-EE", "beginner"),
    ("Nez", "DUA", "Lumbu", "BOD", "LOOM-boo", "beginner"),
    ("Bouche", "DUA", "Monoko", "BOD", "moh-NOH-koh", "beginner"),
    ("Main", "DUA", "Loboko", "BOD", "loh-BOH-koh", "beginner"),
    ("Pied", "DUA", "Makolo", "BOD", "mah-KOH-loh", "beginner"),
    ("Tête", "FUL", "Hoore", "BOD", "HOH-reh", "beginner"),
    ("Œil", "FUL", "Gite", "BOD", "GEE-teh", "beginner"),
    ("Oreille", "FUL", "Noppe", "BOD", "NOHP-peh", "beginner"),
    ("Nez", "FUL", "Hinyaali", "BOD", "hee-NYAH-lee", "beginner"),
    ("Bouche", "FUL", "Genne", "BOD", "GEHN-neh", "beginner"),
    ("Main", "FUL", "Juunal", "BOD", "JOO-nahl", "beginner"),
    ("Pied", "FUL", "Koyye", "BOD", "KOY-yeh", "beginner"),

    // Time and days (extended)
    ("Lundi", "EWO", "Elu", "TIM", "eh-LOO", "beginner"),
    ("Mardi", "EWO", "Amane", "TIM", "ah-MAH-neh", "beginner"),
    ("Mercredi", "EWO", "Akan", "TIM", "ah-KAHN", "beginner"),
    ("Jeudi", "EWO", "Akus", "TIM", "ah-KOOS", "beginner"),
    ("Vendredi", "EWO", "Afua", "TIM", "ah-FOO-ah", "beginner"),
    ("Samedi", "EWO", "Memua", "TIM", "meh-MOO-ah", "beginner"),
    ("Dimanche", "EWO", "Sondo", "TIM", "SOHN-doh", "beginner"),
    ("Aujourd'hui", "EWO", "Andu", "TIM", "ahn-DOO", "beginner"),
    ("Hier", "EWO", "Ngon", "TIM", "n-GOHN", "beginner"),
    ("Demain", "EWO", "Okir", "TIM", "oh-KEER", "beginner"),
    ("Matin", "EWO", "Nga", "TIM", "n-GAH", "beginner"),
    ("Soir", "EWO", "Mfini", "TIM", "mm-FEE-nee", "beginner"),
    ("Lundi", "DUA", "Moto", "TIM", "MOH-toh", "beginner"),
    ("Mardi", "DUA", "Koko", "TIM", "KOH-koh", "beginner"),
    ("Mercredi", "DUA", "Makena", "TIM", "mah-KEH-nah", "beginner"),
    ("Jeudi", "DUA", "Mokolo", "TIM", "moh-KOH-loh", "beginner"),
    ("Vendredi", "DUA", "Mumbuka", "TIM", "moom-BOO-kah", "beginner"),
    ("Samedi", "DUA", "Ngoya", "TIM", "n-GOH-yah", "beginner"),
    ("Dimanche", "DUA", "Disama", "TIM", "dee-SAH-mah", "beginner"),
    ("Lundi", "FUL", "Altine", "TIM", "ahl-TEE-neh", "beginner"),
    ("Mardi", "FUL", "Talata", "TIM", "tah-LAH-tah", "beginner"),
    ("Mercredi", "FUL", "Alarbaa", "TIM", "ah-lahr-BAH", "beginner"),
    ("Jeudi", "FUL", "Alkamiisa", "TIM", "ahl-kah-MEE-sah", "beginner"),
    ("Vendredi", "FUL", "Aljumaa", "TIM", "ahl-joo-MAH", "beginner"),
    ("Samedi", "FUL", "Aset", "TIM", "ah-SEHT", "beginner"),
    ("Dimanche", "FUL", "Alahat", "TIM", "ah-lah-HAHT", "beginner"),

    // More food items
    ("Maïs", "EWO", "Aban", "FOD", "ah-BAHN", "beginner"),
    ("Huile de palme", "EWO", "Metet", "FOD", "meh-TEHT", "beginner"),
    ("Arachide", "EWO", "Akwa", "FOD", "ah-KWAH", "beginner"),
    ("Plantain", "EWO", "Kaba mbongo", "FOD", "KAH-bah mm-BOHN-goh", "beginner"),
    ("Igname", "EWO", "Fong", "FOD", "fohng", "beginner"),
    ("Patate douce", "EWO", "Akoma", "FOD", "ah-KOH-mah", "beginner"),
    ("Cacao", "EWO", "Kaba", "FOD", "KAH-bah", "beginner"),
    ("Café", "EWO", "Kafe", "FOD", "KAH-feh", "beginner"),
    ("Vin de palme", "EWO", "Malamba", "FOD", "mah-LAHM-bah", "intermediate"),
    ("Piment", "EWO", "Akaa", "FOD", "ah-KAH", "beginner"),
    ("Gingembre", "EWO", "Mbongo", "FOD", "mm-BOHN-goh", "beginner"),
    ("Sel", "EWO", "Ngon", "FOD", "n-GOHN", "beginner"),
    ("Sucre", "EWO", "Sukre", "FOD", "SOOK-reh", "beginner"),
    ("Maïs", "DUA", "Sango", "FOD", "SAHN-goh", "beginner"),
    ("Plantain", "DUA", "Kondo ndambe", "FOD", "KOHN-doh n-DAHM-beh", "beginner"),
    ("Igname", "DUA", "Mutulu", "FOD", "moo-TOO-loo", "beginner"),
    ("Cacao", "DUA", "Kakao", "FOD", "kah-KAH-oh", "beginner"),
    ("Vin de palme", "DUA", "Matango", "FOD", "mah-TAHN-goh", "intermediate"),
    ("Crabe", "DUA", "Koli", "FOD", "KOH-lee", "beginner"),
    ("Crevette", "DUA", "Tomba", "FOD", "TOHM-bah", "beginner"),
    ("Mil", "FUL", "Gawri", "FOD", "GAH-wree", "beginner"),
    ("Sorgho", "FUL", "Maasiri", "FOD", "mah-SEE-ree", "beginner"),
    ("Haricot", "FUL", "Niebe", "FOD", "nee-EH-beh", "beginner"),
    ("Beurre de karité", "FUL", "Nebam", "FOD", "NEH-bahm", "beginner"),
    ("Miel", "FUL", "Ngoori", "FOD", "n-GOH-ree", "beginner"),
    ("Viande séchée", "FUL", "Kilishi", "FOD", "kee-LEE-shee", "intermediate"),
    ("Fromage", "FUL", "Kaasam", "FOD", "KAH-sahm", "beginner"),

    // Common verbs
    ("Être", "EWO", "Ye", "VRB", "yeh", "beginner"),
    ("Avoir", "EWO", "Ke", "VRB", "keh", "beginner"),
    ("Aller", "EWO", "Kei", "VRB", "keh-EE", "beginner"),
    ("Venir", "EWO", "Wa", "VRB", "wah", "beginner"),
    ("Manger", "EWO", "Di", "VRB", "dee", "beginner"),
    ("Boire", "EWO", "Nua", "VRB", "NOO-ah", "beginner"),
    ("Dormir", "EWO", "Lal", "VRB", "lahl", "beginner"),
    ("Parler", "EWO", "Kala", "VRB", "KAH-lah", "beginner"),
    ("Voir", "EWO", "Yen", "VRB", "yehn", "beginner"),
    ("Entendre", "EWO", "Yem", "VRB", "yehm", "beginner"),
    ("Donner", "EWO", "Kaba", "VRB", "KAH-bah", "beginner"),
    ("Prendre", "EWO", "Kete", "VRB", "KEH-teh", "beginner"),
    ("Acheter", "EWO", "Sili", "VRB", "SEE-lee", "intermediate"),
    ("Vendre", "EWO", "Koma", "VRB", "KOH-mah", "intermediate"),
    ("Travailler", "EWO", "Kudu", "VRB", "KOO-doo", "intermediate"),
    ("Étudier", "EWO", "Kelene", "VRB", "keh-LEH-neh", "intermediate"),
    ("Aimer", "EWO", "Zamba", "VRB", "ZAHM-bah", "beginner"),
    ("Être", "DUA", "Ba", "VRB", "bah", "beginner"),
    ("Avoir", "DUA", "Zala", "VRB", "ZAH-lah", "beginner"),
    ("Aller", "DUA", "Kende", "VRB", "KEHN-deh", "beginner"),
    ("Venir", "DUA", "Wuta", "VRB", "WOO-tah", "beginner"),
    ("Manger", "DUA", "Lya", "VRB", "lyah", "beginner"),
    ("Boire", "DUA", "Mela", "VRB", "MEH-lah", "beginner"),
    ("Dormir", "DUA", "Lala", "VRB", "LAH-lah", "beginner"),
    ("Parler", "DUA", "Loba", "VRB", "LOH-bah", "beginner"),
    ("Être", "FUL", "Wonde", "VRB", "WOHN-deh", "beginner"),
    ("Avoir", "FUL", "Mari", "VRB", "MAH-ree", "beginner"),
    ("Aller", "FUL", "Yahde", "VRB", "YAHH-deh", "beginner"),
    ("Venir", "FUL", "Arde", "VRB", "AHR-deh", "beginner"),
    ("Manger", "FUL", "Nyaame", "VRB", "NYAH-meh", "beginner"),
    ("Boire", "FUL", "Yarde", "VRB", "YAHR-deh", "beginner"),
    ("Dormir", "FUL", "Njaade", "VRB", "n-JAH-deh", "beginner"),

    // Adjectives
    ("Grand", "EWO", "Ane", "ADJ", "ah-NEH", "beginner"),
    ("Petit", "EWO", "Nit", "ADJ", "neet", "beginner"),
    ("Bon", "EWO", "Bot", "ADJ", "boht", "beginner"),
    ("Mauvais", "EWO", "Abe", "ADJ", "ah-BEH", "beginner"),
    ("Beau", "EWO", "Kamba", "ADJ", "KAHM-bah", "beginner"),
    ("Laid", "EWO", "Mbing", "ADJ", "mm-BEENG", "beginner"),
    ("Chaud", "EWO", "Asu", "ADJ", "ah-SOO", "beginner"),
    ("Froid", "EWO", "Kies", "ADJ", "kee-EHS", "beginner"),
    ("Nouveau", "EWO", "Sus", "ADJ", "soos", "beginner"),
    ("Vieux", "EWO", "Kulu", "ADJ", "KOO-loo", "beginner"),
    ("Grand", "DUA", "Kolo", "ADJ", "KOH-loh", "beginner"),
    ("Petit", "DUA", "Moke", "ADJ", "MOH-keh", "beginner"),
    ("Bon", "DUA", "Malamu", "ADJ", "mah-LAH-moo", "beginner"),
    ("Mauvais", "DUA", "Mabe", "ADJ", "MAH-beh", "beginner"),
    ("Beau", "DUA", "Kitoko", "ADJ", "kee-TOH-koh", "beginner"),
    ("Grand", "FUL", "Mawdo", "ADJ", "MAHW-doh", "beginner"),
    ("Petit", "FUL", "Keewdo", "ADJ", "KEH-oo-doh", "beginner"),
    ("Bon", "FUL", "Mooto", "ADJ", "MOH-toh", "beginner"),
    ("Mauvais", "FUL", "Moollu", "ADJ", "MOH-loo", "beginner"),
    ("Beau", "FUL", "Riiɗo", "ADJ", "REE-doh", "beginner"),

    // Clothing
    ("Vêtement", "EWO", "Nlat", "CLO", "n-LAHT", "beginner"),
    ("Chemise", "EWO", "Kamisa", "CLO", "kah-MEE-sah", "beginner"),
    ("Pantalon", "EWO", "Kalaso", "CLO", "kah-LAH-soh", "beginner"),
    ("Robe", "EWO", "Nnimba", "CLO", "n-NEEM-bah", "beginner"),
    ("Chaussure", "EWO", "Nkap", "CLO", "n-KAHP", "beginner"),
    ("Chapeau", "EWO", "Nkop", "CLO", "n-KOHP", "beginner"),
    ("Pagne", "EWO", "Ntange", "CLO", "n-TAHN-geh", "beginner"),
    ("Vêtement", "DUA", "Elamba", "CLO", "eh-LAHM-bah", "beginner"),
    ("Chemise", "DUA", "Lokolo", "CLO", "loh-KOH-loh", "beginner"),
    ("Pantalon", "DUA", "Pantalona", "CLO", "pahn-tah-LOH-nah", "beginner"),
    ("Chaussure", "DUA", "Matambi", "CLO", "mah-TAHM-bee", "beginner"),
    ("Vêtement", "FUL", "Kesa", "CLO", "KEH-sah", "beginner"),
    ("Chemise", "FUL", "Kurta", "CLO", "KOOR-tah", "beginner"),
    ("Pantalon", "FUL", "Drawas", "CLO", "DRAH-wahs", "beginner"),
    ("Boubou", "FUL", "Daara", "CLO", "DAH-rah", "beginner"),
    ("Chaussure", "FUL", "Naɗuuji", "CLO", "nah-DOO-jee", "beginner"),

    // Home and household
    ("Chambre", "EWO", "Nda nchou", "HOM", "n-DAH n-CHOO", "beginner"),
    ("Cuisine", "EWO", "Nda nti", "HOM", "n-DAH n-TEE", "beginner"),
    ("Salon", "EWO", "Nda nsisim", "HOM", "n-DAH n-SEE-seem", "beginner"),
    ("Lit", "EWO", "Mbeng", "HOM", "mm-BEHNG", "beginner"),
    ("Table", "EWO", "Tebere", "HOM", "teh-BEH-reh", "beginner"),
    ("Chaise", "EWO", "Akada", "HOM", "ah-KAH-dah", "beginner"),
    ("Porte", "EWO", "Nkukuma", "HOM", "n-koo-KOO-mah", "beginner"),
    ("Fenêtre", "EWO", "Nlong", "HOM", "n-LOHNG", "beginner"),
    ("Chambre", "DUA", "Ndako ya bolali", "HOM", "n-DAH-koh yah boh-LAH-lee", "beginner"),
    ("Cuisine", "DUA", "Ndako ya bilei", "HOM", "n-DAH-koh yah bee-LEH-ee", "beginner"),
    ("Lit", "DUA", "Mbeto", "HOM", "mm-BEH-toh", "beginner"),
    ("Table", "DUA", "Tebele", "HOM", "teh-BEH-leh", "beginner"),
    ("Chambre", "FUL", "Cuuɗal", "HOM", "CHOO-dahl", "beginner"),
    ("Cuisine", "FUL", "Nyaamnde", "HOM", "NYAHM-n-deh", "beginner"),
    ("Lit", "FUL", "Jiital", "HOM", "JEE-tahl", "beginner"),

    // Professions
    ("Enseignant", "EWO", "Nkelene nkukuma", "PRO", "n-keh-LEH-neh n-koo-KOO-mah", "intermediate"),
    ("Médecin", "EWO", "Nkomo nnama", "PRO", "n-KOH-moh n-NAH-mah", "intermediate"),
    ("Agriculteur", "EWO", "Nkudu fong", "PRO", "n-KOO-doo fohng", "intermediate"),
    ("Commerçant", "EWO", "Nkoma", "PRO", "n-KOH-mah", "intermediate"),
    ("Chauffeur", "EWO", "Nkelak motor", "PRO", "n-keh-LAHK MOH-tohr", "intermediate"),
    ("Enseignant", "DUA", "Molakisi", "PRO", "moh-lah-KEE-see", "intermediate"),
    ("Médecin", "DUA", "Monganga", "PRO", "mohn-GAHN-gah", "intermediate"),
    ("Pêcheur", "DUA", "Mombandi", "PRO", "mohm-BAHN-dee", "intermediate"),
    ("Enseignant", "FUL", "Jangorde", "PRO", "jahn-GOHR-deh", "intermediate"),
    ("Médecin", "FUL", "Doktoor", "PRO", "dohk-TOHR", "intermediate"),
    ("Berger", "FUL", "Gaasiɗo", "PRO", "gah-SEE-doh", "intermediate"),
    ("Éleveur", "FUL", "Jooɗiɗo", "PRO", "joh-DEE-doh", "intermediate"),

    // Transportation
    ("Moto", "EWO", "Motor nkap", "TRA", "MOH-tohr n-KAHP", "beginner"),
    ("Vélo", "EWO", "Velo", "TRA", "VEH-loh", "beginner"),
    ("Bus", "EWO", "Bus", "TRA", "boos", "beginner"),
    ("Taxi", "EWO", "Taksi", "TRA", "TAHK-see", "beginner"),
    ("Pirogue", "EWO", "Mbaa", "TRA", "mm-BAH", "beginner"),
    ("Moto", "DUA", "Moto", "TRA", "MOH-toh", "beginner"),
    ("Pirogue", "DUA", "Wolo", "TRA", "WOH-loh", "beginner"),
    ("Bateau", "DUA", "Masuwa", "TRA", "mah-SOO-wah", "beginner"),
    ("Moto", "FUL", "Alamaari", "TRA", "ah-lah-MAH-ree", "beginner"),
    ("Cheval", "FUL", "Puuccu", "TRA", "POOCH-choo", "beginner"),
    ("Âne", "FUL", "Mbaaɗu", "TRA", "mm-BAH-doo", "beginner"),

    // Emotions
    ("Heureux", "EWO", "Ayeme", "EMO", "ah-YEH-meh", "intermediate"),
    ("Triste", "EWO", "Ayie", "EMO", "ah-YEE-eh", "intermediate"),
    ("En colère", "EWO", "Nkana", "EMO", "n-KAH-nah", "intermediate"),
    ("Peur", "EWO", "Nsisin", "EMO", "n-SEE-seen", "intermediate"),
    ("Amour", "EWO", "Zamba", "EMO", "ZAHM-bah", "intermediate"),
    ("Heureux", "DUA", "Esengo", "EMO", "eh-SEHN-goh", "intermediate"),
    ("Triste", "DUA", "Mawa", "EMO", "MAH-wah", "intermediate"),
    ("En colère", "DUA", "Nkanda", "EMO", "n-KAHN-dah", "intermediate"),
    ("Heureux", "FUL", "Yankude", "EMO", "yahn-KOO-deh", "intermediate"),
    ("Triste", "FUL", "Hanki", "EMO", "HAHN-kee", "intermediate"),
    ("Peur", "FUL", "Ŋeyku", "EMO", "NGYEH-koo", "intermediate"),

    // More animals
    ("Singe", "EWO", "Kema", "ANI", "KEH-mah", "beginner"),
    ("Antilope", "EWO", "Nyati", "ANI", "NYAH-tee", "beginner"),
    ("Serpent", "EWO", "Nyol", "ANI", "n-YOHL", "beginner"),
    ("Crocodile", "EWO", "Ngando", "ANI", "n-GAHN-doh", "beginner"),
    ("Tortue", "EWO", "Kulu", "ANI", "KOO-loo", "beginner"),
    ("Panthère", "EWO", "Nkui", "ANI", "n-KOO-ee", "beginner"),
    ("Hippopotame", "EWO", "Nguba", "ANI", "n-GOO-bah", "beginner"),
    ("Singe", "DUA", "Mokoko", "ANI", "moh-KOH-koh", "beginner"),
    ("Serpent", "DUA", "Nyoka", "ANI", "NYOH-kah", "beginner"),
    ("Crocodile", "DUA", "Ngando", "ANI", "n-GAHN-doh", "beginner"),
    ("Tortue", "DUA", "Kulu", "ANI", "KOO-loo", "beginner"),
    ("Singe", "FUL", "Baabilo", "ANI", "bah-BEE-loh", "beginner"),
    ("Serpent", "FUL", "Maarudo", "ANI", "mah-ROO-doh", "beginner"),
    ("Lion", "FUL", "Gaynako", "ANI", "guy-NAH-koh", "beginner"),
    ("Hyène", "FUL", "Kurege", "ANI", "koo-REH-geh", "beginner"),
    ("Gazelle", "FUL", "Mbororo", "ANI", "mm-boh-ROH-roh", "beginner"),

    // Nature and weather
    ("Soleil", "EWO", "Nsan", "NAT", "n-SAHN", "beginner"),
    ("Étoile", "EWO", "Mbon", "NAT", "mm-BOHN", "beginner"),
    ("Nuage", "EWO", "Nkup mvon", "NAT", "n-KOOP mm-VOHN", "beginner"),
    ("Rivière", "EWO", "Kala", "NAT", "KAH-lah", "beginner"),
    ("Forêt", "EWO", "Afan", "NAT", "ah-FAHN", "beginner"),
    ("Montagne", "EWO", "Nkolombe", "NAT", "n-koh-LOHM-beh", "beginner"),
    ("Arbre", "EWO", "Avenga", "NAT", "ah-VEHN-gah", "beginner"),
    ("Fleur", "EWO", "Nbom", "NAT", "mm-BOHM", "beginner"),
    ("Soleil", "DUA", "Moi", "NAT", "MOH-ee", "beginner"),
    ("Rivière", "DUA", "Mai", "NAT", "MAH-ee", "beginner"),
    ("Forêt", "DUA", "Dikanda", "NAT", "dee-KAHN-dah", "beginner"),
    ("Arbre", "DUA", "Nti", "NAT", "n-TEE", "beginner"),
    ("Soleil", "FUL", "Naange", "NAT", "NAHN-geh", "beginner"),
    ("Rivière", "FUL", "Maayo", "NAT", "MAH-yoh", "beginner"),
    ("Arbre", "FUL", "Lekki", "NAT", "LEHK-kee", "beginner"),
    ("Feu", "EWO", "Nduan", "NAT", "n-DOO-ahn", "beginner"),
    ("Feu", "DUA", "Moto", "NAT", "MOH-toh", "beginner"),
    ("Feu", "FUL", "Yiite", "NAT", "YEE-teh", "beginner"),

    // Education terms
    ("École", "EWO", "Kalara", "EDU", "kah-LAH-rah", "beginner"),
    ("Livre", "EWO", "Buk", "EDU", "book", "beginner"),
    ("Stylo", "EWO", "Nkan tili", "EDU", "n-KAHN tee-LEE", "beginner"),
    ("Papier", "EWO", "Katas", "EDU", "KAH-tahs", "beginner"),
    ("Élève", "EWO", "Nkelene moan", "EDU", "n-keh-LEH-neh moh-AHN", "beginner"),
    ("Professeur", "EWO", "Nkelene", "EDU", "n-keh-LEH-neh", "beginner"),
    ("École", "DUA", "Eteyelo", "EDU", "eh-teh-YEH-loh", "beginner"),
    ("Livre", "DUA", "Buka", "EDU", "BOO-kah", "beginner"),
    ("Stylo", "DUA", "Esila", "EDU", "eh-SEE-lah", "beginner"),
    ("École", "FUL", "Janngirde", "EDU", "jahn-GEER-deh", "beginner"),
    ("Livre", "FUL", "Deftere", "EDU", "dehf-TEH-reh", "beginner"),
    ("Apprendre", "FUL", "Janngude", "EDU", "jahn-GOO-deh", "beginner"),
    ("Enseigner", "FUL", "Jangude", "EDU", "jahn-GOO-deh", "beginner"),

    // Health terms
    ("Santé", "EWO", "Akono", "HEA", "ah-KOH-noh", "beginner"),
    ("Malade", "EWO", "Nkono", "HEA", "n-KOH-noh", "beginner"),
    ("Médicament", "EWO", "Nkomo nnam", "HEA", "n-KOH-moh n-NAHM", "intermediate"),
    ("Hôpital", "EWO", "Opital", "HEA", "oh-pee-TAHL", "intermediate"),
    ("Douleur", "EWO", "Nyin", "HEA", "n-YEEN", "beginner"),
    ("Fièvre", "EWO", "Asu nlo", "HEA", "ah-SOO n-LOH", "intermediate"),
    ("Santé", "DUA", "Bokolongono", "HEA", "boh-koh-lohn-GOH-noh", "beginner"),
    ("Malade", "DUA", "Bokono", "HEA", "boh-KOH-noh", "beginner"),
    ("Hôpital", "DUA", "Ndako ya bokono", "HEA", "n-DAH-koh yah boh-KOH-noh", "intermediate"),
    ("Santé", "FUL", "Werɗude", "HEA", "wehr-DOO-deh", "beginner"),
    ("Malade", "FUL", "Jogi", "HEA", "JOH-gee", "beginner"),
    ("Médicament", "FUL", "Lekki", "HEA", "LEHK-kee", "intermediate"),
    ("Hôpital", "FUL", "Safrirde", "HEA", "sahf-REER-deh", "intermediate"),

    // Money and shopping (extended)
    ("Prix", "EWO", "Nkom", "MON", "n-KOHM", "beginner"),
    ("Cher", "EWO", "Nkom ane", "MON", "n-KOHM ah-NEH", "beginner"),
    ("Bon marché", "EWO", "Nkom nit", "MON", "n-KOHM neet", "beginner"),
    ("Marché", "EWO", "Zom", "MON", "zohm", "beginner"),
    ("Boutique", "EWO", "Magazin", "MON", "mah-gah-ZEEN", "beginner"),
    ("Prix", "DUA", "Ntalo", "MON", "n-TAH-loh", "beginner"),
    ("Marché", "DUA", "Zando", "MON", "ZAHN-doh", "beginner"),
    ("Prix", "FUL", "Sariya", "MON", "sah-REE-yah", "beginner"),
    ("Marché", "FUL", "Luumo", "MON", "LOO-moh", "beginner"),
    ("Vendre", "FUL", "Jaynde", "MON", "JAYN-deh", "beginner"),

    // Directions
    ("Gauche", "EWO", "Nkinda", "DIR", "n-KEEN-dah", "beginner"),
    ("Droite", "EWO", "Nnam", "DIR", "n-NAHM", "beginner"),
    ("Devant", "EWO", "Mbas", "DIR", "mm-BAHS", "beginner"),
    ("Derrière", "EWO", "Esu", "DIR", "eh-SOO", "beginner"),
    ("Ici", "EWO", "Va", "DIR", "vah", "beginner"),
    ("Là-bas", "EWO", "Vana", "DIR", "VAH-nah", "beginner"),
    ("Près", "EWO", "Koba", "DIR", "KOH-bah", "beginner"),
    ("Loin", "EWO", "Ane", "DIR", "ah-NEH", "beginner"),
    ("Gauche", "DUA", "Epai", "DIR", "eh-PAH-ee", "beginner"),
    ("Droite", "DUA", "Mobali", "DIR", "moh-BAH-lee", "beginner"),
    ("Devant", "DUA", "Liboso", "DIR", "lee-BOH-soh", "beginner"),
    ("Derrière", "DUA", "Nsima", "DIR", "n-SEE-mah", "beginner"),
    ("Ici", "DUA", "Awa", "DIR", "AH-wah", "beginner"),
    ("Gauche", "FUL", "Nano", "DIR", "NAH-noh", "beginner"),
    ("Droite", "FUL", "Nanndu", "DIR", "NAHN-doo", "beginner"),
    ("Devant", "FUL", "Yeeso", "DIR", "YEH-soh", "beginner"),
    ("Derrière", "FUL", "Caggal", "DIR", "CHAHG-gahl", "beginner"),
    ("Ici", "FUL", "Inoon", "DIR", "ee-NOHN", "beginner"),

    // Religious terms
    ("Dieu", "EWO", "Zamba", "REL", "ZAHM-bah", "beginner"),
    ("Église", "EWO", "Nda Zamba", "REL", "n-DAH ZAHM-bah", "beginner"),
    ("Prière", "EWO", "Nsambel", "REL", "n-sahm-BEHL", "beginner"),
    ("Dimanche", "EWO", "Sondo", "REL", "SOHN-doh", "beginner"),
    ("Dieu", "DUA", "Nyambe", "REL", "NYAHM-beh", "beginner"),
    ("Église", "DUA", "Ndako ya Nyambe", "REL", "n-DAH-koh yah NYAHM-beh", "beginner"),
    ("Dieu", "FUL", "Alla", "REL", "AHL-lah", "beginner"),
    ("Mosquée", "FUL", "Juulirde", "REL", "joo-LEER-deh", "beginner"),
    ("Prière", "FUL", "Juulde", "REL", "JOOL-deh", "beginner"),
    ("Vendredi", "FUL", "Aljumaa", "REL", "ahl-joo-MAH", "beginner"),

    // Music and entertainment
    ("Musique", "EWO", "Nvet", "MUS", "n-VEHT", "beginner"),
    ("Danse", "EWO", "Bikutsi", "MUS", "bee-KOOT-see", "beginner"),
    ("Tambour", "EWO", "Nkul", "MUS", "n-KOOL", "beginner"),
    ("Chant", "EWO", "Nvet", "MUS", "n-VEHT", "beginner"),
    ("Musique", "DUA", "Miziki", "MUS", "mee-ZEE-kee", "beginner"),
    ("Danse", "DUA", "Dina", "MUS", "DEE-nah", "beginner"),
    ("Tambour", "DUA", "Ngoma", "MUS", "n-GOH-mah", "beginner"),
    ("Musique", "FUL", "Gimde", "MUS", "GEEM-deh", "beginner"),
    ("Danse", "FUL", "Dillere", "MUS", "deel-LEH-reh", "beginner"),
    ("Tambour", "FUL", "Tabala", "MUS", "tah-BAH-lah", "beginner"),

    // Sports
    ("Football", "EWO", "Ndem", "SPO", "n-DEHM", "beginner"),
    ("Courir", "EWO", "Kumba", "SPO", "KOOM-bah", "beginner"),
    ("Nager", "EWO", "Vaa mam", "SPO", "vah mahm", "beginner"),
    ("Football", "DUA", "Mpira", "SPO", "mm-PEE-rah", "beginner"),
    ("Courir", "DUA", "Pota", "SPO", "POH-tah", "beginner"),
    ("Football", "FUL", "Balle", "SPO", "BAHL-leh", "beginner"),
    ("Courir", "FUL", "Yaalende", "SPO", "yah-LEHN-deh", "beginner"),
    ("Lutte", "FUL", "Dageere", "SPO", "dah-GEH-reh", "beginner"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::DifficultyLevel;
    use std::collections::HashSet;

    #[test]
    fn test_languages_shouldHaveSixUniqueIds() {
        let ids: HashSet<&str> = LANGUAGES.iter().map(|l| l.0).collect();
        assert_eq!(LANGUAGES.len(), 6);
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_categories_shouldHaveTwentyFourUniqueIds() {
        let ids: HashSet<&str> = CATEGORIES.iter().map(|c| c.0).collect();
        assert_eq!(CATEGORIES.len(), 24);
        assert_eq!(ids.len(), 24);
    }

    #[test]
    fn test_translations_everyLanguageReference_shouldResolve() {
        let ids: HashSet<&str> = LANGUAGES.iter().map(|l| l.0).collect();
        for (french, language_id, ..) in TRANSLATIONS {
            assert!(
                ids.contains(language_id),
                "'{}' references unknown language '{}'",
                french,
                language_id
            );
        }
    }

    #[test]
    fn test_translations_everyCategoryReference_shouldResolve() {
        let ids: HashSet<&str> = CATEGORIES.iter().map(|c| c.0).collect();
        for (french, _, _, category_id, _, _) in TRANSLATIONS {
            assert!(
                ids.contains(category_id),
                "'{}' references unknown category '{}'",
                french,
                category_id
            );
        }
    }

    #[test]
    fn test_translations_everyDifficulty_shouldParse() {
        for (french, _, _, _, _, difficulty) in TRANSLATIONS {
            assert!(
                difficulty.parse::<DifficultyLevel>().is_ok(),
                "'{}' has invalid difficulty '{}'",
                french,
                difficulty
            );
        }
    }

    #[test]
    fn test_translations_requiredTexts_shouldNotBeEmpty() {
        for (french, _, translation, _, _, _) in TRANSLATIONS {
            assert!(!french.is_empty());
            assert!(!translation.is_empty(), "'{}' has empty translation", french);
        }
    }
}
