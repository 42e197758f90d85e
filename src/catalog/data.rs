use super::models::Book;

pub static BOOKS: &[Book] = &[
    Book {
        id: "yellowface",
        title: "Yellowface",
        author: "R. F. Kuang",
        year: 2023,
        category: "ficcao",
        price: "R$ 59,90",
        cover: Some("/img/impostora.jpg"),
        tags: &["sátira", "mercado editorial", "tensão", "contemporâneo"],
        description: "Uma autora em ascensão vê a oportunidade perfeita ao alcance das mãos e decide atravessar uma linha perigosa. Entre fama, culpa e mentira, a história vira um espelho afiado sobre identidade, apropriação e o apetite do mercado por narrativas vendáveis.",
        link: Some("#"),
    },
    Book {
        id: "outra-vida",
        title: "Em outra vida talvez?",
        author: "Taylor Jenkins Reid",
        year: 2015,
        category: "romance",
        price: "R$ 49,90",
        cover: Some("/img/emoutravida.jpg"),
        tags: &["romance", "destino", "escolhas", "leve e emocional"],
        description: "Uma noite, duas decisões. A vida se divide em caminhos paralelos, mostrando como pequenas escolhas mudam tudo: amores, amizades e a forma como a gente aprende a existir.",
        link: Some("#"),
    },
    Book {
        id: "sociedade-anel",
        title: "A Sociedade do Anel",
        author: "J. R. R. Tolkien",
        year: 1954,
        category: "fantasia",
        price: "R$ 79,90",
        cover: Some("/img/Capa_senhor_dos_anéis.jpg"),
        tags: &["fantasia", "aventura", "épico", "clássico"],
        description: "O início da jornada pela Terra-média. Um anel, um fardo impossível e uma companhia improvável. Um clássico que moldou a fantasia moderna, com ritmo de lenda e coração de viagem.",
        link: Some("#"),
    },
    Book {
        id: "Dom-Casmurro",
        title: "Dom Casmurro",
        author: "Machado de Assis",
        year: 1899,
        category: "literatura",
        price: "R$ 44,90",
        cover: Some("/img/dom.jpg"),
        tags: &["clássico", "literatura brasileira", "ciúme", "ambiguidade"],
        description: "Bentinho e Capitu: uma história de amor, ciúme e dúvida que atravessa gerações. Machado de Assis constrói um romance onde a verdade é um espelho quebrado, refletindo as complexidades da mente humana e as incertezas do coração.",
        link: Some("#"),
    },
    Book {
        id: "duna",
        title: "Duna",
        author: "Frank Herbert",
        year: 1965,
        category: "sci-fi",
        price: "R$ 69,90",
        cover: Some("/img/Duna.jpg"),
        tags: &["épico", "sci-fi", "política", "ecologia"],
        description: "Em Arrakis, poder e sobrevivência se misturam à profecia e ao controle de um recurso valioso. Um universo vasto, tenso e hipnótico, onde cada decisão cobra juros.",
        link: Some("#"),
    },
    Book {
        id: "relatos-de-um-gato-viajante",
        title: "Relatos de um Gato Viajante",
        author: "Hiro Arikawa",
        year: 2022,
        category: "pop",
        price: "R$ 39,90",
        cover: Some("/img/relatosdeumgato.jpg"),
        tags: &["contos", "humor", "cotidiano", "leve"],
        description: "Histórias curtas e cativantes de um gato que viaja pelo Japão, encontrando pessoas e lugares únicos. Um livro que é um abraço quentinho para os amantes de gatos e de boas histórias.",
        link: Some("#"),
    },
    Book {
        id: "sapiens",
        title: "Sapiens: Uma Breve História da Humanidade",
        author: "Yuval Noah Harari",
        year: 2011,
        category: "historia",
        price: "R$ 69,90",
        cover: Some("/img/sapiens.jpg"),
        tags: &["história", "ciência", "humanidade", "pensamento"],
        description: "Uma jornada fascinante pela história da humanidade, desde os primeiros homens até o presente. Um livro que desafia o pensamento com insights sobre evolução, cultura e o futuro da espécie humana.",
        link: Some("#"),
    },
];
