use super::{ImageMapping, Section};
use crate::models::{ImageConfig, Placeholder};

/// Images shown by the site's sections, in display order.
pub static IMAGE_MAPPING: ImageMapping = ImageMapping::new(SECTIONS);

const SECTIONS: &[Section] = &[
    Section {
        name: "Vineyards",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Vineyards/Copia di Copia di dettaglio vigneti.jpg",
                    alt: "Valdobbiadene Vineyard Detail",
                    width: 1920,
                    height: 1080,
                    quality: Some(95),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Vineyards/unnamed.jpg",
                    alt: "Valdobbiadene Panoramic View",
                    width: 1200,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "2",
                ImageConfig {
                    path: "/images/Vineyards/Copia di colline.jpg",
                    alt: "Terraced Vineyards",
                    width: 1200,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "3",
                ImageConfig {
                    path: "/images/Vineyards/Copia di Copia di vigneti.jpg",
                    alt: "Vineyard Detail",
                    width: 1200,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Grapes",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Grapes/Copia di GLERA.jpg",
                    alt: "Glera grapes on the vine",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Grapes/Copia di vendemmia.jpg",
                    alt: "Grape harvest in Valdobbiadene",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "2",
                ImageConfig {
                    path: "/images/Grapes/_R5A4459.jpg",
                    alt: "Grape detail shot",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Sustainable",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Sustainable/Copia di valdo-2.jpg",
                    alt: "Sustainable viticulture practices",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Sustainable/Copia di valdo-3.jpg",
                    alt: "Land stewardship and sustainability",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Historical Photos",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Historical Photos/Picture1.png",
                    alt: "Historical Valdo winemaking",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Historical Photos/Copia di imbottigliamento-1408x.jpg",
                    alt: "Historical bottling process",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Winemaker",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Winemaker/Copia di Gianfranco Zanon(1).jpg",
                    alt: "Gianfranco Zanon, Master Winemaker",
                    width: 800,
                    height: 600,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Logos",
        images: &[
            (
                "valdo",
                ImageConfig {
                    path: "/images/Logos/Brand completa - 4 colori positivo (1).jpg",
                    alt: "Valdo Prosecco logo in white and gold",
                    width: 300,
                    height: 100,
                    quality: Some(95),
                    placeholder: None,
                },
            ),
            (
                "ws",
                ImageConfig {
                    path: "/images/Logos/Brand completa - 4 colori negativo - Copy.jpg",
                    alt: "Wine Spectator logo",
                    width: 60,
                    height: 30,
                    quality: Some(95),
                    placeholder: None,
                },
            ),
        ],
    },
    Section {
        name: "Casa Valdo",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Casa Valdo/IMG_2470.jpeg",
                    alt: "Casa Valdo exterior facade",
                    width: 800,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Casa Valdo/Picture1.jpg",
                    alt: "Luxury suite at Casa Valdo",
                    width: 800,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "2",
                ImageConfig {
                    path: "/images/Casa Valdo/602322.jpg",
                    alt: "Historic wine cellar at Casa Valdo",
                    width: 800,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "3",
                ImageConfig {
                    path: "/images/Casa Valdo/602376.jpg",
                    alt: "Garden terrace at Casa Valdo",
                    width: 800,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "4",
                ImageConfig {
                    path: "/images/Casa Valdo/602401.jpg",
                    alt: "Dining room at Casa Valdo",
                    width: 800,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "5",
                ImageConfig {
                    path: "/images/Casa Valdo/602338.jpg",
                    alt: "Vineyard view from Casa Valdo",
                    width: 800,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Wine Bottles",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Bottle Shots/Marca Oro Prosecco DOC Brut USA.png",
                    alt: "Valdo Marca Oro DOC Prosecco bottle",
                    width: 400,
                    height: 600,
                    quality: Some(95),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Bottle Shots/Copia di Valdo Numero 10 DOCG 75cl.jpg",
                    alt: "Valdo Numero 10 DOCG Prosecco bottle",
                    width: 400,
                    height: 600,
                    quality: Some(95),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "2",
                ImageConfig {
                    path: "/images/Bottle Shots/Valdobbiadene DOCG USA.png",
                    alt: "Valdo Superiore DOCG Prosecco bottle",
                    width: 400,
                    height: 600,
                    quality: Some(95),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "3",
                ImageConfig {
                    path: "/images/Bottle Shots/Prosecco Rosè MarcaOro_USA.png",
                    alt: "Valdo Marca Oro Rosé DOC Prosecco bottle",
                    width: 400,
                    height: 600,
                    quality: Some(95),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Lifestyle",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Lifestyle/VALDO_1_2323138_prova 2.jpg",
                    alt: "L'Aperitivo - The golden hour ritual",
                    width: 320,
                    height: 320,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Lifestyle/5.jpg",
                    alt: "Al Fresco - Dining under the stars",
                    width: 320,
                    height: 320,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "2",
                ImageConfig {
                    path: "/images/Lifestyle/Picture4.png",
                    alt: "La Festa - Every moment is a celebration",
                    width: 320,
                    height: 320,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Timeline",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/Timeline/3.png",
                    alt: "1938 - The Beginning of Valdo",
                    width: 400,
                    height: 300,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/Timeline/history.png",
                    alt: "1960s - Italian Expansion",
                    width: 400,
                    height: 300,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "2",
                ImageConfig {
                    path: "/images/Historical Photos/Copia di botti2-1408x.jpg",
                    alt: "1980s - Global Conquest",
                    width: 400,
                    height: 300,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "3",
                ImageConfig {
                    path: "/images/Timeline/2017_.png",
                    alt: "Today - Worldwide Recognition",
                    width: 400,
                    height: 300,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
    Section {
        name: "Instagram",
        images: &[
            (
                "0",
                ImageConfig {
                    path: "/images/lifestyle/_R5B1238.jpg",
                    alt: "Instagram post - Celebration with Prosecco",
                    width: 500,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "1",
                ImageConfig {
                    path: "/images/lifestyle/_R5B0204-2.jpg",
                    alt: "Instagram post - Alfresco dining",
                    width: 500,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "2",
                ImageConfig {
                    path: "/images/Vineyards/Copia di Copia di vigneti.jpg",
                    alt: "Instagram post - Vineyard panorama",
                    width: 500,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "3",
                ImageConfig {
                    path: "/images/lifestyle/_R5A4520.jpg",
                    alt: "Instagram post - Friends gathering",
                    width: 500,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "4",
                ImageConfig {
                    path: "/images/Bottle Shots/Marca Oro Prosecco DOC Brut USA.png",
                    alt: "Instagram post - Wine bottle",
                    width: 500,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
            (
                "5",
                ImageConfig {
                    path: "/images/lifestyle/9.jpg",
                    alt: "Instagram post - Celebration",
                    width: 500,
                    height: 500,
                    quality: Some(90),
                    placeholder: Some(Placeholder::Blur),
                },
            ),
        ],
    },
];
