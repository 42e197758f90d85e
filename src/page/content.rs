pub const BRAND: &str = "Livraria Arcana";

pub const HERO_TITLE: &str = "Histórias que atravessam o tempo";
pub const HERO_TAGLINE: &str =
    "Uma livraria pequena, curadoria grande. Clássicos, fantasia e achados para ler devagar.";

pub struct Chapter {
    pub title: &'static str,
    pub body: &'static str,
}

pub static CHAPTERS: &[Chapter] = &[
    Chapter {
        title: "Capítulo I: a primeira estante",
        body: "Tudo começou com uma estante de madeira e uma caixa de livros usados, numa garagem que cheirava a papel antigo.",
    },
    Chapter {
        title: "Capítulo II: os leitores da meia-noite",
        body: "Os clubes de leitura viraram tradição. Às sextas, as luzes ficavam acesas até tarde e as conversas iam longe.",
    },
    Chapter {
        title: "Capítulo III: a Arcana de hoje",
        body: "Hoje a curadoria continua artesanal: cada título do catálogo foi lido, discutido e recomendado por alguém da casa.",
    },
];

pub static CONTACT_LINES: &[&str] = &[
    "Rua das Letras, 42 · Centro",
    "contato@livrariaarcana.com.br",
    "Seg a sáb · 10h às 20h",
];
