//! Static checklist vocabulary: sections and items inspected in each zone.

use crate::models::{Ship, Zone};

/// One titled group of checklist items.
pub struct Section {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

const ACOMODACION: &[Section] = &[
    Section {
        name: "SUELOS",
        items: &["Troncos de Escaleras", "Pasillos", "Salones"],
    },
    Section {
        name: "MOQUETA",
        items: &["Limpieza Moqueta"],
    },
    Section {
        name: "ASEOS HOMBRES",
        items: &["Limpieza Sanitarios", "Suelos", "Lavabos"],
    },
    Section {
        name: "ASEOS MUJERES",
        items: &["Limpieza Sanitarios", "Suelos", "Lavabos"],
    },
    Section {
        name: "BUTACAS/SOFÁS",
        items: &["Limpieza Debajo", "Limpieza Tejido"],
    },
    Section {
        name: "CAMAROTES",
        items: &["Camas Bien Hechas", "Camarote Limpio"],
    },
    Section {
        name: "PAPELERAS",
        items: &["Limpieza del Cubo", "Segregación de Residuos"],
    },
];

const AUTOSERVICIO: &[Section] = &[
    Section {
        name: "SUELOS",
        items: &["Zona Expositores Comida"],
    },
    Section {
        name: "EXPOSITORES COMIDA",
        items: &[
            "Limpieza tras retirar bandejas comida",
            "Limpieza Zonas Bajas",
        ],
    },
    Section {
        name: "CONTENEDORES",
        items: &["Limpieza interior", "Retirada Basura", "Tapa Cerrada"],
    },
];

const BAR: &[Section] = &[
    Section {
        name: "SUELOS",
        items: &[
            "Limpios y desinfectados",
            "Sin restos de grasa",
            "Zonas de difícil acceso, bajo muebles, bajo maquinaria, bajo neveras, tras arcones",
        ],
    },
    Section {
        name: "TECHOS",
        items: &[
            "Limpieza lamas techo (gradas/óxido)",
            "Rejillas ventilación (limpieza)",
            "Luminarias (carcasas limpias y en buen estado)",
        ],
    },
    Section {
        name: "NEVERAS/CONGELADORES",
        items: &[
            "Limpieza exterior e interior",
            "Temperatura correcta",
            "Correcto almacenaje bandejas/Etiquetas/Papel Film",
            "Estado de bisagras y tiradores",
            "Limpieza bajo y tras neveras",
        ],
    },
    Section {
        name: "ESTANTERÍAS Y MUEBLES INOX",
        items: &[
            "Limpieza de las estanterías/Puertas/Baldas/Parte Superior",
            "Orden Interior",
            "Productos perfectamente cerrados y en fecha (No caducados)",
        ],
    },
    Section {
        name: "MÁQUINA CAFÉ",
        items: &["Limpieza bajo y tras", "Máquina de café en buen estado"],
    },
    Section {
        name: "HORNO",
        items: &[
            "Limpieza exterior, superficies, puertas",
            "Limpieza interior, superficies, rejillas, ausencia partículas sólidas y de grasa",
            "Limpieza Bajo Horno",
            "Limpieza de superficies y mesas auxiliares (Cajas cartón y restos de pan)",
        ],
    },
    Section {
        name: "CUBOS DE BASURA",
        items: &[
            "Limpieza del cubo",
            "Funcionamiento del pedal y estado general del cubo",
            "Segregación de residuos",
        ],
    },
];

const COCINA: &[Section] = &[
    Section {
        name: "SUELOS",
        items: &[
            "Limpios y desinfectados",
            "Sin restos de grasa",
            "Zonas de difícil acceso limpios/Bajo Muebles/Bajo Maquinaria/Bajo neveras/Tras Arcones",
        ],
    },
    Section {
        name: "TECHOS",
        items: &[
            "Limpieza Lamas Techo",
            "Rejillas ventilación (Limpieza)",
            "Luminarias (Carcasas Limpias y en buen estado)",
        ],
    },
    Section {
        name: "CUARTO ASEO / SISTEMA THOMIL",
        items: &[
            "Limpieza y orden",
            "Suelos/Techos y mamparos limpios",
            "Sistema Thomil operativo y productos de limpieza ordenados y sin contacto con el suelo",
        ],
    },
    Section {
        name: "NEVERAS/ARCONES/CONGELADORES",
        items: &[
            "Limpieza exterior e interior",
            "Temperatura correcta",
            "Correcto almacenaje de bandejas/etiquetas/papel film",
            "Estado de bisagras y tiradores",
            "Limpieza bajo y tras neveras",
        ],
    },
    Section {
        name: "MESA CALIENTE 1",
        items: &[
            "Limpieza exterior arcón",
            "Limpieza bajo y tras arcón",
            "Limpieza y orden interior (Ausencia de hielo)",
            "Estado de puertas/Bisagras/Tiradores",
        ],
    },
    Section {
        name: "MESA CALIENTE 2",
        items: &[
            "Limpieza de encimera",
            "Limpieza interior de los calentadores",
            "Funcionamiento/Temperatura",
            "Limpieza Bajo Calentadores",
        ],
    },
    Section {
        name: "ESTANTERÍAS Y MUEBLES INOX",
        items: &[
            "Limpieza de las estanterías/Puertas/Baldas/Parte Superior",
            "Orden Interior",
            "Productos perfectamente cerrados y en fecha (No caducados)",
        ],
    },
    Section {
        name: "MÁQUINA CORTAFIAMBRE",
        items: &[
            "Limpieza/Desmontaje de piezas (Disco de corte, etc)",
            "Funcionamiento",
            "Guante de corte (Estado/Limpieza)",
            "Encimera auxiliar/Superficie de trabajo Limpia",
        ],
    },
    Section {
        name: "FREGADERO DE LIMPIEZA VERDURAS",
        items: &[
            "Limpieza del fregadero (Sin restos de comida)",
            "Limpieza de la superficie de trabajo verduras",
            "Limpieza de los estantes inferiores y superiores/sin restos",
            "Sistema Thomil de lavado de verduras funcional/Tiras comprobación",
            "Rejillas desagüe colocadas y limpias",
            "Grifos limpios, en buen estado y con filtro limpio",
            "Caudal de agua y temperaturas tanto fría como caliente correcta",
        ],
    },
    Section {
        name: "FREGADEROS EN GENERAL",
        items: &[
            "Limpieza del fregadero",
            "Sin restos de comida",
            "Rejillas desagüe colocadas y limpias",
            "Grifos limpios, en buen estado y con filtro limpio",
            "Caudal de agua y temperaturas tanto fría como caliente correcta",
        ],
    },
    Section {
        name: "LAVAMANOS",
        items: &[
            "Limpieza",
            "Portarrollos de papel",
            "Jabonera",
            "Caudal de agua y temperaturas tanto fría como caliente correcta",
        ],
    },
    Section {
        name: "MÁQUINA LAVAVAJILLAS",
        items: &[
            "Limpieza exterior",
            "Limpieza interior/sin restos de comida/sin agua sucia",
            "Limpieza tras y bajo máquina",
            "Funcionamiento/capota/temperaturas/brazos de lavado",
        ],
    },
    Section {
        name: "HORNO",
        items: &[
            "Limpieza exterior/superficies/puertas",
            "Limpieza interior/superficies/rejillas/ausencia de partículas sólidas y de grasa",
            "Limpieza bajo horno",
            "Limpieza de superficies y mesas auxiliares (Cajas de cartón y restos de pan)",
        ],
    },
    Section {
        name: "FOGONES",
        items: &[
            "Limpieza fogones",
            "Limpieza de mesas auxiliares",
            "Funcionamiento de los fogones",
            "Limpieza bajo módulo de fogones",
        ],
    },
    Section {
        name: "PLANCHA",
        items: &[
            "Limpieza de la plancha",
            "Limpieza bajo plancha",
            "Funcionamiento de la plancha",
        ],
    },
    Section {
        name: "SARTÉN BASCULANTE",
        items: &[
            "Limpieza superficie exterior",
            "Limpieza cuba interior",
            "Funcionamiento sartén basculante",
            "Limpieza bajo sartén basculante",
        ],
    },
    Section {
        name: "MARMITA / OLLA A PRESIÓN",
        items: &[
            "Limpieza exterior de la olla",
            "Limpieza interior de la olla",
            "Funcionamiento de la olla",
            "Limpieza bajo olla",
        ],
    },
    Section {
        name: "CAMPANA DE EXTRACCIÓN",
        items: &[
            "Limpieza de la campana de extracción (Rejillas y superficies)",
            "Funcionamiento de la campana",
        ],
    },
    Section {
        name: "CANALETAS/IMBORNALES SUELO EN TORNO A COCINA",
        items: &[
            "Limpieza de las canaletas de recogida y desagües (Canaleta/Rejilla de cubrición/desagües)",
        ],
    },
    Section {
        name: "CUBOS DE BASURA",
        items: &[
            "Limpieza del cubo",
            "Funcionamiento del pedal y estado general del cubo",
            "Segregación de residuos",
            "Ausencia de restos de comida fuera de horario de cocina",
        ],
    },
];

/// Ordered checklist sections for a zone.
pub fn checklist(zone: Zone) -> &'static [Section] {
    match zone {
        Zone::Acomodacion => ACOMODACION,
        Zone::Autoservicio => AUTOSERVICIO,
        Zone::Bar => BAR,
        Zone::Cocina => COCINA,
    }
}

/// Join key shared by every per-item state map.
pub fn item_key(section: &str, item: &str) -> String {
    format!("{section} - {item}")
}

/// All item keys of a zone, in checklist order.
pub fn zone_keys(zone: Zone) -> Vec<String> {
    checklist(zone)
        .iter()
        .flat_map(|s| s.items.iter().map(move |i| item_key(s.name, i)))
        .collect()
}

/// Every (ship, zone) combination, ship-major.
pub fn all_pairs() -> Vec<(Ship, Zone)> {
    Ship::ALL
        .iter()
        .flat_map(|s| Zone::ALL.iter().map(move |z| (*s, *z)))
        .collect()
}
