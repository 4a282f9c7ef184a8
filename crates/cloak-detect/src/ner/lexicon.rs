//! Embedded lexicons backing the named-entity layer.
//!
//! Deliberately small: high-precision anchors (honorifics, org suffixes,
//! gazetteer entries) rather than broad coverage. Precision matters more
//! than recall here — a false positive burns a vault token forever.

/// Titles that introduce a person name.
pub const HONORIFICS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Miss", "Dr", "Prof", "Sir", "Madam", "Rev", "Capt",
];

/// Common given names (anchor for PERSON spans).
pub const GIVEN_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Paul",
    "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy",
    "Jason", "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen",
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen", "Amy", "Angela", "Helen", "Anna",
    "Alice", "Grace", "Bob", "Jane", "Tom", "Jim", "Sam", "Max", "Alex", "Olivia", "Emma",
    "Noah", "Liam", "Sophia", "Isabella", "Ethan", "Lucas", "Mia", "Charlotte", "Priya",
    "Wei", "Yuki", "Ahmed", "Fatima", "Carlos", "Maria", "Ivan", "Olga", "Hans", "Pierre",
];

/// Suffix words that close an organization name.
pub const ORG_SUFFIXES: &[&str] = &[
    "Inc", "Corp", "Corporation", "Ltd", "LLC", "LLP", "PLC", "GmbH", "Pty", "Co", "Company",
    "Group", "Holdings", "Foundation", "Institute", "University", "Bank", "Labs", "Systems",
    "Technologies", "Partners",
];

/// Countries, US states and large administrative regions (GPE labels).
pub const GPE_REGIONS: &[&str] = &[
    "Australia", "Austria", "Belgium", "Brazil", "Canada", "China", "Denmark", "Egypt",
    "England", "Finland", "France", "Germany", "Greece", "India", "Indonesia", "Ireland",
    "Israel", "Italy", "Japan", "Kenya", "Mexico", "Netherlands", "Nigeria", "Norway",
    "Pakistan", "Poland", "Portugal", "Russia", "Scotland", "Singapore", "Spain", "Sweden",
    "Switzerland", "Thailand", "Turkey", "Ukraine", "Vietnam", "Wales", "Alabama", "Alaska",
    "Arizona", "California", "Colorado", "Florida", "Georgia", "Hawaii", "Illinois", "Indiana",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Missouri", "Montana", "Nebraska", "Nevada", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "Wisconsin", "Wyoming", "Queensland", "Victoria", "Tasmania", "Bavaria",
];

/// Major cities (LOC labels). Two-word names are separate entries checked
/// before single words.
pub const CITIES: &[&str] = &[
    "Amsterdam", "Athens", "Atlanta", "Auckland", "Bangkok", "Barcelona", "Beijing", "Berlin",
    "Boston", "Brisbane", "Brussels", "Cairo", "Chicago", "Copenhagen", "Dallas", "Delhi",
    "Denver", "Dubai", "Dublin", "Edinburgh", "Frankfurt", "Geneva", "Hamburg", "Helsinki",
    "Houston", "Istanbul", "Jakarta", "Lagos", "Lisbon", "London", "Madrid", "Melbourne",
    "Miami", "Milan", "Montreal", "Moscow", "Mumbai", "Munich", "Nairobi", "Oslo", "Paris",
    "Perth", "Philadelphia", "Phoenix", "Prague", "Rome", "Seattle", "Seoul", "Shanghai",
    "Singapore", "Stockholm", "Sydney", "Tokyo", "Toronto", "Vancouver", "Vienna", "Warsaw",
    "Wellington", "Zurich",
];

/// Two-word city names, stored as (first, second) pairs.
pub const CITY_PAIRS: &[(&str, &str)] = &[
    ("New", "York"),
    ("Los", "Angeles"),
    ("San", "Francisco"),
    ("San", "Diego"),
    ("Las", "Vegas"),
    ("Hong", "Kong"),
    ("Cape", "Town"),
    ("Tel", "Aviv"),
    ("Buenos", "Aires"),
    ("Mexico", "City"),
    ("Kuala", "Lumpur"),
    ("New", "Orleans"),
    ("Salt", "Lake"),
    ("Rio", "de"),
];

/// Nationality, religious and political group terms (NORP labels).
pub const NRP_TERMS: &[&str] = &[
    "American", "Australian", "Austrian", "Belgian", "Brazilian", "British", "Buddhist",
    "Canadian", "Catholic", "Chinese", "Christian", "Danish", "Dutch", "Egyptian", "English",
    "European", "Finnish", "French", "German", "Greek", "Hindu", "Indian", "Indonesian",
    "Irish", "Israeli", "Italian", "Japanese", "Jewish", "Kenyan", "Mexican", "Muslim",
    "Nigerian", "Norwegian", "Pakistani", "Polish", "Portuguese", "Protestant", "Russian",
    "Scottish", "Sikh", "Spanish", "Swedish", "Swiss", "Thai", "Turkish", "Ukrainian",
    "Vietnamese", "Welsh", "Democrat", "Republican",
];

/// Month names and abbreviations (DATE anchors).
pub const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep",
    "Sept", "Oct", "Nov", "Dec",
];
