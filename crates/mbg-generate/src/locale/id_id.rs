//! Indonesian names, places, phone prefixes, companies, and filler text.

pub struct City {
    pub name: &'static str,
    pub postal_codes: &'static [&'static str],
}

pub const FIRST_NAMES: &[&str] = &[
    "Ahmad", "Budi", "Cahya", "Dewi", "Eko", "Fajar", "Galih", "Hendra", "Indah", "Joko",
    "Kartika", "Lina", "Muhammad", "Nita", "Omar", "Putri", "Rizky", "Siti", "Taufik", "Umi",
    "Vina", "Wati", "Yudi", "Zahra", "Agus", "Bambang", "Dian", "Fitri", "Gunawan", "Hesti",
    "Irfan", "Juli", "Kurniawan", "Lestari", "Mega", "Nurul", "Oki", "Pramudya", "Ratna", "Sri",
    "Tri", "Udin", "Wahyu", "Yanto", "Andi", "Bayu", "Citra", "Doni", "Erna", "Fauzi", "Gita",
    "Hadi", "Intan", "Jaya", "Kiki", "Lukman", "Maya", "Nando", "Putu", "Qori", "Rani",
    "Surya", "Tina", "Ujang", "Vera", "Wawan", "Xena", "Yuli", "Zaki", "Adit", "Bima", "Candra",
    "Dedi", "Ela", "Ferdi", "Gilang", "Hana", "Ivan", "Jeni",
];

pub const LAST_NAMES: &[&str] = &[
    // common
    "Pratama", "Saputra", "Wijaya", "Kusuma", "Hidayat", "Ramadhan", "Putra", "Sari",
    "Wulandari", "Permana", "Nugraha", "Utami", "Setiawan", "Rahayu", "Susanto", "Handoko",
    "Santoso", "Prasetyo", "Yulianto", "Firmansyah",
    // Batak
    "Siregar", "Nasution", "Harahap", "Siagian", "Simanjuntak", "Pardede", "Manurung",
    "Hutabarat", "Panjaitan", "Sihombing", "Situmorang", "Sinaga", "Napitupulu", "Simatupang",
    "Tampubolon", "Silalahi", "Simbolon",
    // Javanese
    "Suryono", "Widodo", "Hartono", "Prabowo", "Sulistyo", "Wibowo", "Sudirman", "Sugiarto",
    "Sutrisno", "Suharto", "Supriyadi", "Wahyudi",
    // Sundanese
    "Hermawan", "Kurniawan", "Suherman", "Gunawan", "Suryadi", "Mulyana", "Sopyan", "Saefudin",
    "Suparman", "Suryana",
    // Minang and Mandailing
    "Lubis", "Daulay", "Batubara", "Rangkuti", "Tanjung", "Hasibuan",
    // other
    "Dharma", "Atmaja", "Negara", "Mahendra", "Adinata",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "email.com",
    "mail.com",
    "ymail.com",
    "protonmail.com",
];

/// Mobile prefixes by operator: Telkomsel, Indosat, XL, Tri, Smartfren, Axis.
pub const MOBILE_PREFIXES: &[&str] = &[
    "0811", "0812", "0813", "0821", "0822", "0823", "0852", "0853", "0814", "0815", "0816",
    "0855", "0856", "0857", "0858", "0817", "0818", "0819", "0859", "0877", "0878", "0895",
    "0896", "0897", "0898", "0899", "0881", "0882", "0883", "0884", "0885", "0886", "0887",
    "0888", "0889", "0838", "0831", "0832", "0833",
];

pub const STREETS: &[&str] = &[
    "Jl. Sudirman", "Jl. Thamrin", "Jl. Gatot Subroto", "Jl. Ahmad Yani", "Jl. Diponegoro",
    "Jl. Imam Bonjol", "Jl. Veteran", "Jl. Merdeka", "Jl. Pahlawan", "Jl. Kartini",
    "Jl. Hayam Wuruk", "Jl. Gajah Mada", "Jl. Pemuda", "Jl. Asia Afrika", "Jl. Cendana",
    "Jl. Melati", "Jl. Mawar", "Jl. Kenanga", "Jl. Raya Bogor", "Jl. Margonda",
    "Jl. Kebon Jeruk", "Jl. Panglima Polim", "Jl. Fatmawati", "Jl. Tendean", "Jl. Casablanca",
    "Jl. Rasuna Said", "Jl. Kuningan", "Jl. Senopati", "Jl. Kemang", "Jl. Ampera",
    "Jl. Antasari", "Jl. Pramuka", "Jl. Salemba", "Jl. Kramat", "Jl. Cikini", "Jl. Menteng",
    "Jl. Tebet", "Jl. Kalibata", "Jl. Dewi Sartika", "Jl. Otto Iskandardinata",
];

pub const CITIES: &[City] = &[
    City {
        name: "Jakarta Pusat",
        postal_codes: &["10110", "10120", "10130", "10140", "10150"],
    },
    City {
        name: "Jakarta Selatan",
        postal_codes: &["12110", "12120", "12130", "12140", "12150"],
    },
    City {
        name: "Jakarta Barat",
        postal_codes: &["11110", "11120", "11130", "11140", "11150"],
    },
    City {
        name: "Jakarta Timur",
        postal_codes: &["13110", "13120", "13130", "13140", "13150"],
    },
    City {
        name: "Jakarta Utara",
        postal_codes: &["14110", "14120", "14130", "14140", "14150"],
    },
    City {
        name: "Bandung",
        postal_codes: &["40111", "40112", "40113", "40114", "40115"],
    },
    City {
        name: "Surabaya",
        postal_codes: &["60111", "60112", "60113", "60114", "60115"],
    },
    City {
        name: "Medan",
        postal_codes: &["20111", "20112", "20113", "20114", "20115"],
    },
    City {
        name: "Depok",
        postal_codes: &["16411", "16412", "16413", "16414", "16415"],
    },
    City {
        name: "Semarang",
        postal_codes: &["50111", "50112", "50113", "50114", "50115"],
    },
    City {
        name: "Makassar",
        postal_codes: &["90111", "90112", "90113", "90114"],
    },
    City {
        name: "Yogyakarta",
        postal_codes: &["55111", "55112", "55113", "55114"],
    },
    City {
        name: "Tangerang",
        postal_codes: &["15111", "15112", "15113", "15114", "15115"],
    },
    City {
        name: "Tangerang Selatan",
        postal_codes: &["15310", "15311", "15312", "15313"],
    },
    City {
        name: "Bekasi",
        postal_codes: &["17111", "17112", "17113", "17114", "17115"],
    },
    City {
        name: "Malang",
        postal_codes: &["65111", "65112", "65113", "65114"],
    },
    City {
        name: "Bogor",
        postal_codes: &["16111", "16112", "16113", "16114"],
    },
    City {
        name: "Palembang",
        postal_codes: &["30111", "30112", "30113", "30114"],
    },
    City {
        name: "Denpasar",
        postal_codes: &["80111", "80112", "80113", "80114"],
    },
    City {
        name: "Balikpapan",
        postal_codes: &["76111", "76112", "76113"],
    },
    City {
        name: "Banjarmasin",
        postal_codes: &["70111", "70112", "70113"],
    },
    City {
        name: "Pontianak",
        postal_codes: &["78111", "78112", "78113"],
    },
    City {
        name: "Manado",
        postal_codes: &["95111", "95112", "95113"],
    },
    City {
        name: "Padang",
        postal_codes: &["25111", "25112", "25113"],
    },
    City {
        name: "Pekanbaru",
        postal_codes: &["28111", "28112", "28113"],
    },
    City {
        name: "Batam",
        postal_codes: &["29432", "29433", "29434"],
    },
    City {
        name: "Solo",
        postal_codes: &["57111", "57112", "57113"],
    },
    City {
        name: "Cirebon",
        postal_codes: &["45111", "45112", "45113"],
    },
];

pub const PROVINCES: &[&str] = &[
    "Aceh",
    "Sumatera Utara",
    "Sumatera Barat",
    "Riau",
    "Jambi",
    "Sumatera Selatan",
    "Bengkulu",
    "Lampung",
    "Kepulauan Bangka Belitung",
    "Kepulauan Riau",
    "DKI Jakarta",
    "Jawa Barat",
    "Jawa Tengah",
    "DI Yogyakarta",
    "Jawa Timur",
    "Banten",
    "Bali",
    "Nusa Tenggara Barat",
    "Nusa Tenggara Timur",
    "Kalimantan Barat",
    "Kalimantan Tengah",
    "Kalimantan Selatan",
    "Kalimantan Timur",
    "Kalimantan Utara",
    "Sulawesi Utara",
    "Sulawesi Tengah",
    "Sulawesi Selatan",
    "Sulawesi Tenggara",
    "Gorontalo",
    "Sulawesi Barat",
    "Maluku",
    "Maluku Utara",
    "Papua Barat",
    "Papua",
    "Papua Selatan",
    "Papua Tengah",
    "Papua Pegunungan",
];

/// Legal entity prefixes; PT is listed more than once to weight it.
pub const LEGAL_ENTITIES: &[&str] = &["PT", "CV", "UD", "PT", "PT"];

pub const COMPANY_FIRST_WORDS: &[&str] = &[
    "Maju", "Sinar", "Bumi", "Karya", "Cipta", "Mega", "Prima", "Global", "Indo", "Nusa",
    "Cahaya", "Gemilang", "Surya", "Inti", "Multi", "Eka", "Tri", "Bina", "Graha", "Duta",
    "Anugerah", "Berkah", "Sentral", "Mitra", "Jaya", "Agung", "Lestari", "Mandala", "Citra",
    "Permata",
];

pub const COMPANY_SECOND_WORDS: &[&str] = &[
    "Jaya", "Abadi", "Sentosa", "Mandiri", "Utama", "Perkasa", "Makmur", "Cemerlang", "Berkah",
    "Sejahtera", "Pratama", "Persada", "Gemilang", "Lestari", "Sakti", "Mulia", "Indah",
    "Bahagia", "Sukses", "Tama",
];

/// Empty entries mean "no suffix" and weight the draw towards shorter names.
pub const COMPANY_SUFFIXES: &[&str] = &[
    "", "", "", "Nusantara", "Indonesia", "Mandiri", "Sejahtera", "Tbk", "Group",
];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

pub const COLORS: &[&str] = &[
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#A133FF", "#33FFF5", "#FFD433", "#FF8C33",
    "#8CFF33", "#338CFF", "#FF338C", "#33FF8C", "#C70039", "#900C3F", "#581845", "#FFC300",
    "#DAF7A6", "#1ABC9C", "#2ECC71", "#3498DB", "#9B59B6", "#E74C3C", "#F39C12", "#16A085",
    "#27AE60", "#2980B9", "#8E44AD", "#C0392B", "#D35400",
];
