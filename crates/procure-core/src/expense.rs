//! Expense category (Kostenart) catalog.
//!
//! Reference data for the cost-type field of the order form. The form field
//! itself stays free text; the catalog only helps users pick a code.

use serde::Serialize;
use ts_rs::TS;

/// One entry of the expense category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ExpenseCategory {
    pub code: &'static str,
    pub name: &'static str,
    /// Typical purchases booked under this code. May be empty.
    pub description: &'static str,
}

impl ExpenseCategory {
    /// Case-insensitive match against code, name and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.code.contains(&query)
            || self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

static CATEGORIES: [ExpenseCategory; 27] = [
    ExpenseCategory {
        code: "60100",
        name: "Geschäftsbedarf",
        description: "Toner, Druckeretiketten, Druckerpatronen, Injekt Folien, Fotopapier für den Drucker, Plotter-Papier, USB-Stick, CDs, CD-Boxen, Akkus für Kameras",
    },
    ExpenseCategory {
        code: "60110",
        name: "Papier",
        description: "Papierbedarf für das Büro",
    },
    ExpenseCategory {
        code: "60111",
        name: "Visitenkarten",
        description: "Visitenkarten",
    },
    ExpenseCategory {
        code: "60112",
        name: "Vordrucke, Formulare, Ausweise",
        description: "Urkunden, Zeugnisse, Dienstausweise",
    },
    ExpenseCategory {
        code: "60113",
        name: "Bürobedarf und Lehr- und Unterrichtsmaterial",
        description: "Stifte, Kreide, Kreidehalter, Folienmarkplätze, Tafel, Moderationsmaterialien, Flipchart, Vorlesungsunterlagen, Skripte, Laserpointer, Zirkel, Leim, Taschenrechner, Lineal, Geodreieck, Magnete, Schablonen, Löcher, Tacker, Kopierfolien, Ordner, Mappen, Stempel, Kleinmaschinen, Namensschilder, Pinnwand, Versandtaschen, Trennstreifen",
    },
    ExpenseCategory {
        code: "62003",
        name: "Elektro- und Elektronikmaterial",
        description: "Dioden, Kabel, Leitungen, Stromumwandler, Elektronikmaterial, Elektrozubehör, Geräteanstallationsmaterial, Kondensatoren, Batterien, Leuchtdioden, Widerstände, Steckdosenleisten, Steckzubehör, Adapterkabel, Widerstände, Kabel, Elektronik, Steuerergeräte für Motoren, Leiterplatten",
    },
    ExpenseCategory {
        code: "62004",
        name: "Gase",
        description: "Büssner Stickstoff, Wasserstoff, Plastische Gase (Heizöl), Druckbehälter",
    },
    ExpenseCategory {
        code: "62005",
        name: "Chemikalien",
        description: "",
    },
    ExpenseCategory {
        code: "62011",
        name: "Laborutensilien",
        description: "Pipetten, Schalen, Flaschen, Messzylinder, Petrischalen, Reaktionsgefäße, Universalbehälter, Zellkulturfläschen",
    },
    ExpenseCategory {
        code: "62017",
        name: "Schutzmaßnahmen Labor",
        description: "Strahenschutz, Messgeräte, Schutzkleidung, Schutzbrille, Sicherheitswerkzeuge, Hinweisschilder",
    },
    ExpenseCategory {
        code: "62018",
        name: "Roh-, Hilfs-, Betriebsstoffe Labor",
        description: "Latexhandschuhe, Schleifpapier, Löskolben, Lambourtratschen, Heißklebepistolen, Klebstoffe, Nasenschutzpaper",
    },
    ExpenseCategory {
        code: "62200",
        name: "Hardware bis 800 Euro netto",
        description: "Copy Station, Festplatten, Scanner, M-Karte, USB-Lautsprecher, Tastatur, Switches, Mouse, Box, Tonabnahme, PC-Lautsprecher, Bürstenmaus, Netzwerk",
    },
    ExpenseCategory {
        code: "62301",
        name: "Software und Lizenzen bis 800 Euro netto",
        description: "",
    },
    ExpenseCategory {
        code: "62310",
        name: "Mobiliar bis 800 Euro netto",
        description: "Laptoptasche, Lampe, Container, Schrankschienen, Bürodrehstuhl, Freischwinger, Stehtisch, Abfallbehälter, Deckenventilationen, Bürostuhl, Tafel, Whiteboard",
    },
    ExpenseCategory {
        code: "62311",
        name: "Maschinen, Geräte und Fuhrpark bis 800 Euro netto",
        description: "Beschaffung von Geräten bzw. deren Instandhaltung bis 800 € netto sind. Beispiele: Gebrauchtkostenabrechnung bis 800 € netto sind, sonst 91001 - Staubsauger, Pumpe, Gasflaschenregler, Warneanlage, Antriebe, Kompressor, Netzgeräte, Diktiergerät",
    },
    ExpenseCategory {
        code: "62312",
        name: "Medien, Video, Fotografie bis 800 Euro netto",
        description: "Temperaturmessgerät, Schaumstoffzange, Hubwagen, Stuhlwagen, Fahrrad-Bügelpacker, Tischwagen, Wasserspender, Kamera, Bildbearbeitung, TV, DVD-Player, Beamer, Antennen, Foto-Kabel, Monitor, Internet, Roll Up Display, Sicherheitsschuhe",
    },
    ExpenseCategory {
        code: "62315",
        name: "Dienst- und Schutzkleidung bis 800 Euro netto",
        description: "Fotografen, Mikrofonhalterung, Projektor, Projektionsfläche, Internetkameras, Roll Up Display, Sicherheitsschuhe",
    },
    ExpenseCategory {
        code: "62400",
        name: "Reparaturen Geräte, Maschinen, EDV und Fuhrpark",
        description: "Laborgeräte, Fax, Drucker, Rechner, Kamera, Videogeräte",
    },
    ExpenseCategory {
        code: "63000",
        name: "Strom",
        description: "Abschlagszahlung BHW, Sammlzuschläge",
    },
    ExpenseCategory {
        code: "63002",
        name: "(Heiz-)Gas",
        description: "Erdgas, Heizgas, Gas für Labore in 62001 oder 62018",
    },
    ExpenseCategory {
        code: "63010",
        name: "Wasser, Abwasser, Niederschlagswasser",
        description: "",
    },
    ExpenseCategory {
        code: "63107",
        name: "Reinigungs-, Hygieneartikel",
        description: "Seife, Reinigungsmittel, Toilettenhygienemittel, Spülmaschinentabs, salz, Sprit, Benzin für Rasenmäher, Streugut, Leuchtmittel, Wischgut, Reinigungsgeräte, Besen, Werkzeug, Sauggut, Blumenerle, Dünger",
    },
    ExpenseCategory {
        code: "63209",
        name: "Verbrauchsmaterial, Rohstoffe, Fremdbauteile bezüglich Gebäudemanagement",
        description: "",
    },
    ExpenseCategory {
        code: "63590",
        name: "Sonstige Nebenkosten der Datenverarbeitung",
        description: "Domainpräsentgeld, Einrichtungsengeld (für Internetseite)",
    },
    ExpenseCategory {
        code: "66501",
        name: "Behindertenweiterförderung",
        description: "Arbeitsleistung",
    },
    ExpenseCategory {
        code: "68030",
        name: "Allgemeiner Hochschulsport",
        description: "Hallenmiete, Pacht, Ausstattung, Übungsleiter, Geräte",
    },
    ExpenseCategory {
        code: "68058",
        name: "Medizinische Hilfsmittel",
        description: "Erste Hilfekoffer, Verbandkästen, erste Hilfe Handschuhe, Pflaster, Bildschirmbrille",
    },
];

/// All categories, ordered by code.
pub fn expense_categories() -> &'static [ExpenseCategory] {
    &CATEGORIES
}

/// Looks up a category by its exact code.
pub fn find_category(code: &str) -> Option<&'static ExpenseCategory> {
    let code = code.trim();
    CATEGORIES.iter().find(|category| category.code == code)
}

/// Categories matching a free-text query, in catalog order.
pub fn search_categories(query: &str) -> impl Iterator<Item = &'static ExpenseCategory> + '_ {
    CATEGORIES.iter().filter(move |category| category.matches(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let codes: Vec<&str> = expense_categories().iter().map(|c| c.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn test_find_category() {
        let category = find_category("62003").unwrap();
        assert_eq!(category.name, "Elektro- und Elektronikmaterial");
        assert!(find_category(" 60110 ").is_some());
        assert!(find_category("99999").is_none());
    }

    #[test]
    fn test_search_categories() {
        let hits: Vec<&str> = search_categories("papier").map(|c| c.code).collect();
        assert!(hits.contains(&"60110"));
        assert_eq!(search_categories("").count(), expense_categories().len());
        assert_eq!(search_categories("xyzzy").count(), 0);
    }
}
