use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::geo::Coordinates;

/// UI language used to resolve localized country names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Es];

    /// Resolve a BCP 47 tag such as `fr-CA` to a supported language, English otherwise.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Self::Fr,
            "es" => Self::Es,
            _ => Self::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Fr => 1,
            Self::Es => 2,
        }
    }
}

/// Static registry entry. Codes are ISO 3166-1 alpha-2 / alpha-3, upper case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub iso3: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    names: [&'static str; 3],
}

impl Country {
    pub fn name(&self, language: Language) -> &'static str {
        self.names[language.index()]
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn to_record(&self, language: Language) -> CountryRecord {
        CountryRecord {
            code: self.code.to_owned(),
            name: self.name(language).to_owned(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Owned, serializable country as it travels in score payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

const fn country(
    code: &'static str,
    iso3: &'static str,
    latitude: f64,
    longitude: f64,
    en: &'static str,
    fr: &'static str,
    es: &'static str,
) -> Country {
    Country {
        code,
        iso3,
        latitude,
        longitude,
        names: [en, fr, es],
    }
}

pub static COUNTRIES: &[Country] = &[
    country("AD", "AND", 42.546245, 1.601554, "Andorra", "Andorre", "Andorra"),
    country("AE", "ARE", 23.424076, 53.847818, "United Arab Emirates", "Émirats arabes unis", "Emiratos Árabes Unidos"),
    country("AF", "AFG", 33.93911, 67.709953, "Afghanistan", "Afghanistan", "Afganistán"),
    country("AG", "ATG", 17.060816, -61.796428, "Antigua and Barbuda", "Antigua-et-Barbuda", "Antigua y Barbuda"),
    country("AL", "ALB", 41.153332, 20.168331, "Albania", "Albanie", "Albania"),
    country("AM", "ARM", 40.069099, 45.038189, "Armenia", "Arménie", "Armenia"),
    country("AO", "AGO", -11.202692, 17.873887, "Angola", "Angola", "Angola"),
    country("AR", "ARG", -38.416097, -63.616672, "Argentina", "Argentine", "Argentina"),
    country("AT", "AUT", 47.516231, 14.550072, "Austria", "Autriche", "Austria"),
    country("AU", "AUS", -25.274398, 133.775136, "Australia", "Australie", "Australia"),
    country("AW", "ABW", 12.52111, -69.968338, "Aruba", "Aruba", "Aruba"),
    country("AZ", "AZE", 40.143105, 47.576927, "Azerbaijan", "Azerbaïdjan", "Azerbaiyán"),
    country("BA", "BIH", 43.915886, 17.679076, "Bosnia and Herzegovina", "Bosnie-Herzégovine", "Bosnia y Herzegovina"),
    country("BB", "BRB", 13.193887, -59.543198, "Barbados", "Barbade", "Barbados"),
    country("BD", "BGD", 23.684994, 90.356331, "Bangladesh", "Bangladesh", "Bangladés"),
    country("BE", "BEL", 50.503887, 4.469936, "Belgium", "Belgique", "Bélgica"),
    country("BF", "BFA", 12.238333, -1.561593, "Burkina Faso", "Burkina Faso", "Burkina Faso"),
    country("BG", "BGR", 42.733883, 25.48583, "Bulgaria", "Bulgarie", "Bulgaria"),
    country("BH", "BHR", 25.930414, 50.637772, "Bahrain", "Bahreïn", "Baréin"),
    country("BI", "BDI", -3.373056, 29.918886, "Burundi", "Burundi", "Burundi"),
    country("BJ", "BEN", 9.30769, 2.315834, "Benin", "Bénin", "Benín"),
    country("BM", "BMU", 32.321384, -64.75737, "Bermuda", "Bermudes", "Bermudas"),
    country("BN", "BRN", 4.535277, 114.727669, "Brunei", "Brunei", "Brunéi"),
    country("BO", "BOL", -16.290154, -63.588653, "Bolivia", "Bolivie", "Bolivia"),
    country("BR", "BRA", -14.235004, -51.92528, "Brazil", "Brésil", "Brasil"),
    country("BS", "BHS", 25.03428, -77.39628, "Bahamas", "Bahamas", "Bahamas"),
    country("BT", "BTN", 27.514162, 90.433601, "Bhutan", "Bhoutan", "Bután"),
    country("BW", "BWA", -22.328474, 24.684866, "Botswana", "Botswana", "Botsuana"),
    country("BY", "BLR", 53.709807, 27.953389, "Belarus", "Biélorussie", "Bielorrusia"),
    country("BZ", "BLZ", 17.189877, -88.49765, "Belize", "Belize", "Belice"),
    country("CA", "CAN", 56.130366, -106.346771, "Canada", "Canada", "Canadá"),
    country("CD", "COD", -4.038333, 21.758664, "Democratic Republic of the Congo", "République démocratique du Congo", "República Democrática del Congo"),
    country("CF", "CAF", 6.611111, 20.939444, "Central African Republic", "République centrafricaine", "República Centroafricana"),
    country("CG", "COG", -0.228021, 15.827659, "Republic of the Congo", "République du Congo", "República del Congo"),
    country("CH", "CHE", 46.818188, 8.227512, "Switzerland", "Suisse", "Suiza"),
    country("CI", "CIV", 7.539989, -5.54708, "Côte d'Ivoire", "Côte d'Ivoire", "Costa de Marfil"),
    country("CL", "CHL", -35.675147, -71.542969, "Chile", "Chili", "Chile"),
    country("CM", "CMR", 7.369722, 12.354722, "Cameroon", "Cameroun", "Camerún"),
    country("CN", "CHN", 35.86166, 104.195397, "China", "Chine", "China"),
    country("CO", "COL", 4.570868, -74.297333, "Colombia", "Colombie", "Colombia"),
    country("CR", "CRI", 9.748917, -83.753428, "Costa Rica", "Costa Rica", "Costa Rica"),
    country("CU", "CUB", 21.521757, -77.781167, "Cuba", "Cuba", "Cuba"),
    country("CV", "CPV", 16.002082, -24.013197, "Cape Verde", "Cap-Vert", "Cabo Verde"),
    country("CY", "CYP", 35.126413, 33.429859, "Cyprus", "Chypre", "Chipre"),
    country("CZ", "CZE", 49.817492, 15.472962, "Czech Republic", "Tchéquie", "República Checa"),
    country("DE", "DEU", 51.165691, 10.451526, "Germany", "Allemagne", "Alemania"),
    country("DJ", "DJI", 11.825138, 42.590275, "Djibouti", "Djibouti", "Yibuti"),
    country("DK", "DNK", 56.26392, 9.501785, "Denmark", "Danemark", "Dinamarca"),
    country("DM", "DMA", 15.414999, -61.370976, "Dominica", "Dominique", "Dominica"),
    country("DO", "DOM", 18.735693, -70.162651, "Dominican Republic", "République dominicaine", "República Dominicana"),
    country("DZ", "DZA", 28.033886, 1.659626, "Algeria", "Algérie", "Argelia"),
    country("EC", "ECU", -1.831239, -78.183406, "Ecuador", "Équateur", "Ecuador"),
    country("EE", "EST", 58.595272, 25.013607, "Estonia", "Estonie", "Estonia"),
    country("EG", "EGY", 26.820553, 30.802498, "Egypt", "Égypte", "Egipto"),
    country("ER", "ERI", 15.179384, 39.782334, "Eritrea", "Érythrée", "Eritrea"),
    country("ES", "ESP", 40.463667, -3.74922, "Spain", "Espagne", "España"),
    country("ET", "ETH", 9.145, 40.489673, "Ethiopia", "Éthiopie", "Etiopía"),
    country("FI", "FIN", 61.92411, 25.748151, "Finland", "Finlande", "Finlandia"),
    country("FJ", "FJI", -16.578193, 179.414413, "Fiji", "Fidji", "Fiyi"),
    country("FM", "FSM", 7.425554, 150.550812, "Micronesia", "Micronésie", "Micronesia"),
    country("FR", "FRA", 46.227638, 2.213749, "France", "France", "Francia"),
    country("GA", "GAB", -0.803689, 11.609444, "Gabon", "Gabon", "Gabón"),
    country("GB", "GBR", 55.378051, -3.435973, "United Kingdom", "Royaume-Uni", "Reino Unido"),
    country("GD", "GRD", 12.262776, -61.604171, "Grenada", "Grenade", "Granada"),
    country("GE", "GEO", 42.315407, 43.356892, "Georgia", "Géorgie", "Georgia"),
    country("GH", "GHA", 7.946527, -1.023194, "Ghana", "Ghana", "Ghana"),
    country("GL", "GRL", 71.706936, -42.604303, "Greenland", "Groenland", "Groenlandia"),
    country("GM", "GMB", 13.443182, -15.310139, "Gambia", "Gambie", "Gambia"),
    country("GN", "GIN", 9.945587, -9.696645, "Guinea", "Guinée", "Guinea"),
    country("GQ", "GNQ", 1.650801, 10.267895, "Equatorial Guinea", "Guinée équatoriale", "Guinea Ecuatorial"),
    country("GR", "GRC", 39.074208, 21.824312, "Greece", "Grèce", "Grecia"),
    country("GT", "GTM", 15.783471, -90.230759, "Guatemala", "Guatemala", "Guatemala"),
    country("GW", "GNB", 11.803749, -15.180413, "Guinea-Bissau", "Guinée-Bissau", "Guinea-Bisáu"),
    country("GY", "GUY", 4.860416, -58.93018, "Guyana", "Guyana", "Guyana"),
    country("HK", "HKG", 22.396428, 114.109497, "Hong Kong", "Hong Kong", "Hong Kong"),
    country("HN", "HND", 15.199999, -86.241905, "Honduras", "Honduras", "Honduras"),
    country("HR", "HRV", 45.1, 15.2, "Croatia", "Croatie", "Croacia"),
    country("HT", "HTI", 18.971187, -72.285215, "Haiti", "Haïti", "Haití"),
    country("HU", "HUN", 47.162494, 19.503304, "Hungary", "Hongrie", "Hungría"),
    country("ID", "IDN", -0.789275, 113.921327, "Indonesia", "Indonésie", "Indonesia"),
    country("IE", "IRL", 53.41291, -8.24389, "Ireland", "Irlande", "Irlanda"),
    country("IL", "ISR", 31.046051, 34.851612, "Israel", "Israël", "Israel"),
    country("IN", "IND", 20.593684, 78.96288, "India", "Inde", "India"),
    country("IQ", "IRQ", 33.223191, 43.679291, "Iraq", "Irak", "Irak"),
    country("IR", "IRN", 32.427908, 53.688046, "Iran", "Iran", "Irán"),
    country("IS", "ISL", 64.963051, -19.020835, "Iceland", "Islande", "Islandia"),
    country("IT", "ITA", 41.87194, 12.56738, "Italy", "Italie", "Italia"),
    country("JM", "JAM", 18.109581, -77.297508, "Jamaica", "Jamaïque", "Jamaica"),
    country("JO", "JOR", 30.585164, 36.238414, "Jordan", "Jordanie", "Jordania"),
    country("JP", "JPN", 36.204824, 138.252924, "Japan", "Japon", "Japón"),
    country("KE", "KEN", -0.023559, 37.906193, "Kenya", "Kenya", "Kenia"),
    country("KG", "KGZ", 41.20438, 74.766098, "Kyrgyzstan", "Kirghizistan", "Kirguistán"),
    country("KH", "KHM", 12.565679, 104.990963, "Cambodia", "Cambodge", "Camboya"),
    country("KI", "KIR", -3.370417, -168.734039, "Kiribati", "Kiribati", "Kiribati"),
    country("KM", "COM", -11.875001, 43.872219, "Comoros", "Comores", "Comoras"),
    country("KN", "KNA", 17.357822, -62.782998, "Saint Kitts and Nevis", "Saint-Christophe-et-Niévès", "San Cristóbal y Nieves"),
    country("KP", "PRK", 40.339852, 127.510093, "North Korea", "Corée du Nord", "Corea del Norte"),
    country("KR", "KOR", 35.907757, 127.766922, "South Korea", "Corée du Sud", "Corea del Sur"),
    country("KW", "KWT", 29.31166, 47.481766, "Kuwait", "Koweït", "Kuwait"),
    country("KZ", "KAZ", 48.019573, 66.923684, "Kazakhstan", "Kazakhstan", "Kazajistán"),
    country("LA", "LAO", 19.85627, 102.495496, "Laos", "Laos", "Laos"),
    country("LB", "LBN", 33.854721, 35.862285, "Lebanon", "Liban", "Líbano"),
    country("LC", "LCA", 13.909444, -60.978893, "Saint Lucia", "Sainte-Lucie", "Santa Lucía"),
    country("LI", "LIE", 47.166, 9.555373, "Liechtenstein", "Liechtenstein", "Liechtenstein"),
    country("LK", "LKA", 7.873054, 80.771797, "Sri Lanka", "Sri Lanka", "Sri Lanka"),
    country("LR", "LBR", 6.428055, -9.429499, "Liberia", "Liberia", "Liberia"),
    country("LS", "LSO", -29.609988, 28.233608, "Lesotho", "Lesotho", "Lesoto"),
    country("LT", "LTU", 55.169438, 23.881275, "Lithuania", "Lituanie", "Lituania"),
    country("LU", "LUX", 49.815273, 6.129583, "Luxembourg", "Luxembourg", "Luxemburgo"),
    country("LV", "LVA", 56.879635, 24.603189, "Latvia", "Lettonie", "Letonia"),
    country("LY", "LBY", 26.3351, 17.228331, "Libya", "Libye", "Libia"),
    country("MA", "MAR", 31.791702, -7.09262, "Morocco", "Maroc", "Marruecos"),
    country("MC", "MCO", 43.750298, 7.412841, "Monaco", "Monaco", "Mónaco"),
    country("MD", "MDA", 47.411631, 28.369885, "Moldova", "Moldavie", "Moldavia"),
    country("ME", "MNE", 42.708678, 19.37439, "Montenegro", "Monténégro", "Montenegro"),
    country("MG", "MDG", -18.766947, 46.869107, "Madagascar", "Madagascar", "Madagascar"),
    country("MH", "MHL", 7.131474, 171.184478, "Marshall Islands", "Îles Marshall", "Islas Marshall"),
    country("MK", "MKD", 41.608635, 21.745275, "North Macedonia", "Macédoine du Nord", "Macedonia del Norte"),
    country("ML", "MLI", 17.570692, -3.996166, "Mali", "Mali", "Malí"),
    country("MM", "MMR", 21.913965, 95.956223, "Myanmar", "Birmanie", "Birmania"),
    country("MN", "MNG", 46.862496, 103.846656, "Mongolia", "Mongolie", "Mongolia"),
    country("MO", "MAC", 22.198745, 113.543873, "Macau", "Macao", "Macao"),
    country("MR", "MRT", 21.00789, -10.940835, "Mauritania", "Mauritanie", "Mauritania"),
    country("MT", "MLT", 35.937496, 14.375416, "Malta", "Malte", "Malta"),
    country("MU", "MUS", -20.348404, 57.552152, "Mauritius", "Maurice", "Mauricio"),
    country("MV", "MDV", 3.202778, 73.22068, "Maldives", "Maldives", "Maldivas"),
    country("MW", "MWI", -13.254308, 34.301525, "Malawi", "Malawi", "Malaui"),
    country("MX", "MEX", 23.634501, -102.552784, "Mexico", "Mexique", "México"),
    country("MY", "MYS", 4.210484, 101.975766, "Malaysia", "Malaisie", "Malasia"),
    country("MZ", "MOZ", -18.665695, 35.529562, "Mozambique", "Mozambique", "Mozambique"),
    country("NA", "NAM", -22.95764, 18.49041, "Namibia", "Namibie", "Namibia"),
    country("NE", "NER", 17.607789, 8.081666, "Niger", "Niger", "Níger"),
    country("NG", "NGA", 9.081999, 8.675277, "Nigeria", "Nigeria", "Nigeria"),
    country("NI", "NIC", 12.865416, -85.207229, "Nicaragua", "Nicaragua", "Nicaragua"),
    country("NL", "NLD", 52.132633, 5.291266, "Netherlands", "Pays-Bas", "Países Bajos"),
    country("NO", "NOR", 60.472024, 8.468946, "Norway", "Norvège", "Noruega"),
    country("NP", "NPL", 28.394857, 84.124008, "Nepal", "Népal", "Nepal"),
    country("NR", "NRU", -0.522778, 166.931503, "Nauru", "Nauru", "Nauru"),
    country("NZ", "NZL", -40.900557, 174.885971, "New Zealand", "Nouvelle-Zélande", "Nueva Zelanda"),
    country("OM", "OMN", 21.512583, 55.923255, "Oman", "Oman", "Omán"),
    country("PA", "PAN", 8.537981, -80.782127, "Panama", "Panama", "Panamá"),
    country("PE", "PER", -9.189967, -75.015152, "Peru", "Pérou", "Perú"),
    country("PG", "PNG", -6.314993, 143.95555, "Papua New Guinea", "Papouasie-Nouvelle-Guinée", "Papúa Nueva Guinea"),
    country("PH", "PHL", 12.879721, 121.774017, "Philippines", "Philippines", "Filipinas"),
    country("PK", "PAK", 30.375321, 69.345116, "Pakistan", "Pakistan", "Pakistán"),
    country("PL", "POL", 51.919438, 19.145136, "Poland", "Pologne", "Polonia"),
    country("PS", "PSE", 31.952162, 35.233154, "Palestine", "Palestine", "Palestina"),
    country("PT", "PRT", 39.399872, -8.224454, "Portugal", "Portugal", "Portugal"),
    country("PW", "PLW", 7.51498, 134.58252, "Palau", "Palaos", "Palaos"),
    country("PY", "PRY", -23.442503, -58.443832, "Paraguay", "Paraguay", "Paraguay"),
    country("QA", "QAT", 25.354826, 51.183884, "Qatar", "Qatar", "Catar"),
    country("RO", "ROU", 45.943161, 24.96676, "Romania", "Roumanie", "Rumania"),
    country("RS", "SRB", 44.016521, 21.005859, "Serbia", "Serbie", "Serbia"),
    country("RU", "RUS", 61.52401, 105.318756, "Russia", "Russie", "Rusia"),
    country("RW", "RWA", -1.940278, 29.873888, "Rwanda", "Rwanda", "Ruanda"),
    country("SA", "SAU", 23.885942, 45.079162, "Saudi Arabia", "Arabie saoudite", "Arabia Saudita"),
    country("SB", "SLB", -9.64571, 160.156194, "Solomon Islands", "Îles Salomon", "Islas Salomón"),
    country("SC", "SYC", -4.679574, 55.491977, "Seychelles", "Seychelles", "Seychelles"),
    country("SD", "SDN", 12.862807, 30.217636, "Sudan", "Soudan", "Sudán"),
    country("SE", "SWE", 60.128161, 18.643501, "Sweden", "Suède", "Suecia"),
    country("SG", "SGP", 1.352083, 103.819836, "Singapore", "Singapour", "Singapur"),
    country("SI", "SVN", 46.151241, 14.995463, "Slovenia", "Slovénie", "Eslovenia"),
    country("SK", "SVK", 48.669026, 19.699024, "Slovakia", "Slovaquie", "Eslovaquia"),
    country("SL", "SLE", 8.460555, -11.779889, "Sierra Leone", "Sierra Leone", "Sierra Leona"),
    country("SM", "SMR", 43.94236, 12.457777, "San Marino", "Saint-Marin", "San Marino"),
    country("SN", "SEN", 14.497401, -14.452362, "Senegal", "Sénégal", "Senegal"),
    country("SO", "SOM", 5.152149, 46.199616, "Somalia", "Somalie", "Somalia"),
    country("SR", "SUR", 3.919305, -56.027783, "Suriname", "Suriname", "Surinam"),
    country("SS", "SSD", 6.876992, 31.306979, "South Sudan", "Soudan du Sud", "Sudán del Sur"),
    country("ST", "STP", 0.18636, 6.613081, "São Tomé and Príncipe", "Sao Tomé-et-Principe", "Santo Tomé y Príncipe"),
    country("SV", "SLV", 13.794185, -88.89653, "El Salvador", "Salvador", "El Salvador"),
    country("SY", "SYR", 34.802075, 38.996815, "Syria", "Syrie", "Siria"),
    country("SZ", "SWZ", -26.522503, 31.465866, "Eswatini", "Eswatini", "Esuatini"),
    country("TD", "TCD", 15.454166, 18.732207, "Chad", "Tchad", "Chad"),
    country("TG", "TGO", 8.619543, 0.824782, "Togo", "Togo", "Togo"),
    country("TH", "THA", 15.870032, 100.992541, "Thailand", "Thaïlande", "Tailandia"),
    country("TJ", "TJK", 38.861034, 71.276093, "Tajikistan", "Tadjikistan", "Tayikistán"),
    country("TL", "TLS", -8.874217, 125.727539, "Timor-Leste", "Timor oriental", "Timor Oriental"),
    country("TM", "TKM", 38.969719, 59.556278, "Turkmenistan", "Turkménistan", "Turkmenistán"),
    country("TN", "TUN", 33.886917, 9.537499, "Tunisia", "Tunisie", "Túnez"),
    country("TO", "TON", -21.178986, -175.198242, "Tonga", "Tonga", "Tonga"),
    country("TR", "TUR", 38.963745, 35.243322, "Turkey", "Turquie", "Turquía"),
    country("TT", "TTO", 10.691803, -61.222503, "Trinidad and Tobago", "Trinité-et-Tobago", "Trinidad y Tobago"),
    country("TV", "TUV", -7.109535, 177.64933, "Tuvalu", "Tuvalu", "Tuvalu"),
    country("TW", "TWN", 23.69781, 120.960515, "Taiwan", "Taïwan", "Taiwán"),
    country("TZ", "TZA", -6.369028, 34.888822, "Tanzania", "Tanzanie", "Tanzania"),
    country("UA", "UKR", 48.379433, 31.16558, "Ukraine", "Ukraine", "Ucrania"),
    country("UG", "UGA", 1.373333, 32.290275, "Uganda", "Ouganda", "Uganda"),
    country("US", "USA", 37.09024, -95.712891, "United States", "États-Unis", "Estados Unidos"),
    country("UY", "URY", -32.522779, -55.765835, "Uruguay", "Uruguay", "Uruguay"),
    country("UZ", "UZB", 41.377491, 64.585262, "Uzbekistan", "Ouzbékistan", "Uzbekistán"),
    country("VC", "VCT", 12.984305, -61.287228, "Saint Vincent and the Grenadines", "Saint-Vincent-et-les-Grenadines", "San Vicente y las Granadinas"),
    country("VE", "VEN", 6.42375, -66.58973, "Venezuela", "Venezuela", "Venezuela"),
    country("VN", "VNM", 14.058324, 108.277199, "Vietnam", "Viêt Nam", "Vietnam"),
    country("VU", "VUT", -15.376706, 166.959158, "Vanuatu", "Vanuatu", "Vanuatu"),
    country("WS", "WSM", -13.759029, -172.104629, "Samoa", "Samoa", "Samoa"),
    country("XK", "XKX", 42.602636, 20.902977, "Kosovo", "Kosovo", "Kosovo"),
    country("YE", "YEM", 15.552727, 48.516388, "Yemen", "Yémen", "Yemen"),
    country("ZA", "ZAF", -30.559482, 22.937506, "South Africa", "Afrique du Sud", "Sudáfrica"),
    country("ZM", "ZMB", -13.133897, 27.849332, "Zambia", "Zambie", "Zambia"),
    country("ZW", "ZWE", -19.015438, 29.154857, "Zimbabwe", "Zimbabwe", "Zimbabue"),
];

/// Fold a country name for comparison: strip diacritics, spacing and punctuation, lower-case.
pub fn sanitize_country_name(name: &str) -> String {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| !matches!(ch, '-' | ' ' | '\'' | '\u{2019}' | '(' | ')' | '.' | ','))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Look up a registry entry by ISO alpha-2 code, ignoring case and surrounding whitespace.
pub fn find_by_code(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code))
}

/// Resolve free-text input against the localized names, falling back to English.
pub fn find_by_name(language: Language, input: &str) -> Option<&'static Country> {
    let needle = sanitize_country_name(input);
    if needle.is_empty() {
        return None;
    }

    let matches = |lang: Language| {
        COUNTRIES
            .iter()
            .find(|country| sanitize_country_name(country.name(lang)) == needle)
    };

    matches(language).or_else(|| {
        if language == Language::En {
            None
        } else {
            matches(Language::En)
        }
    })
}

/// Lower-case ISO alpha-3 code, the form the trade visualization expects.
pub fn iso3_lower(code: &str) -> Option<String> {
    find_by_code(code).map(|country| country.iso3.to_ascii_lowercase())
}

/// Localized names sorted for autocomplete lists.
pub fn sorted_names(language: Language) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = COUNTRIES.iter().map(|c| c.name(language)).collect();
    names.sort_by_key(|name| sanitize_country_name(name));
    names
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn name_matching_ignores_case_and_trailing_space() {
        let a = find_by_name(Language::En, "United States").expect("exact name");
        let b = find_by_name(Language::En, "united states").expect("lower case");
        let c = find_by_name(Language::En, "UNITED STATES ").expect("upper case with space");
        assert_eq!(a.code, "US");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn name_matching_ignores_diacritics_and_punctuation() {
        let ivory = find_by_name(Language::En, "cote divoire").expect("folded name");
        assert_eq!(ivory.code, "CI");
        let guinea = find_by_name(Language::En, "Guinea Bissau").expect("hyphen dropped");
        assert_eq!(guinea.code, "GW");
    }

    #[test]
    fn localized_lookup_falls_back_to_english() {
        assert_eq!(
            find_by_name(Language::Fr, "Allemagne").map(|c| c.code),
            Some("DE")
        );
        assert_eq!(
            find_by_name(Language::Es, "Japón").map(|c| c.code),
            Some("JP")
        );
        assert_eq!(
            find_by_name(Language::Fr, "Germany").map(|c| c.code),
            Some("DE")
        );
    }

    #[test]
    fn unknown_and_empty_names_do_not_match() {
        assert!(find_by_name(Language::En, "Narnia").is_none());
        assert!(find_by_name(Language::En, "   ").is_none());
    }

    #[test]
    fn code_lookup_is_case_insensitive() {
        assert_eq!(find_by_code("fr").map(|c| c.iso3), Some("FRA"));
        assert_eq!(find_by_code(" BR ").map(|c| c.iso3), Some("BRA"));
        assert!(find_by_code("ZZ").is_none());
        assert_eq!(iso3_lower("de").as_deref(), Some("deu"));
    }

    #[test]
    fn registry_codes_and_names_are_unique() {
        let mut codes = HashSet::new();
        let mut iso3 = HashSet::new();
        for country in COUNTRIES {
            assert_eq!(country.code.len(), 2, "{}", country.code);
            assert_eq!(country.iso3.len(), 3, "{}", country.iso3);
            assert!(codes.insert(country.code), "duplicate {}", country.code);
            assert!(iso3.insert(country.iso3), "duplicate {}", country.iso3);
            assert!((-90.0..=90.0).contains(&country.latitude));
            assert!((-180.0..=180.0).contains(&country.longitude));
        }

        for language in Language::ALL {
            let mut names = HashSet::new();
            for country in COUNTRIES {
                assert!(
                    names.insert(sanitize_country_name(country.name(language))),
                    "ambiguous {} name {}",
                    language.tag(),
                    country.name(language)
                );
            }
        }
    }

    #[test]
    fn language_tags_resolve_to_supported_languages() {
        assert_eq!(Language::from_tag("fr-CA"), Language::Fr);
        assert_eq!(Language::from_tag("es"), Language::Es);
        assert_eq!(Language::from_tag("de-DE"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }
}
