//! Built-in question catalog used when no remote catalog is configured or
//! the remote fetch fails.

use study_core::model::{Question, QuestionId, SubjectKey, Video, VideoId};

fn q(
    id: &str,
    subject: SubjectKey,
    prompt: &str,
    options: [&str; 4],
    correct: usize,
    explanation: &str,
) -> Question {
    Question::new(
        QuestionId::new(id),
        subject,
        prompt,
        options.into_iter().map(str::to_string).collect(),
        correct,
        explanation,
    )
    .expect("demo catalog entries are valid")
}

/// The full built-in demo catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn questions() -> Vec<Question> {
    vec![
        // ─── Língua Portuguesa ──────────────────────────────────────────
        q(
            "pt-1",
            SubjectKey::Portugues,
            "Assinale a alternativa em que a concordância verbal está CORRETA:",
            [
                "Fazem dez anos que não viajo.",
                "Houveram muitos problemas na reunião.",
                "Existem várias soluções para o problema.",
                "Haviam chegado os convidados.",
            ],
            2,
            "O verbo \"existir\" concorda normalmente com o sujeito. \"Várias soluções\" é plural, portanto \"existem\".",
        ),
        q(
            "pt-2",
            SubjectKey::Portugues,
            "Identifique a figura de linguagem presente em: \"A cidade dormia tranquilamente.\"",
            ["Metáfora", "Prosopopeia (Personificação)", "Hipérbole", "Metonímia"],
            1,
            "Prosopopeia atribui características humanas a seres inanimados. A cidade não dorme literalmente.",
        ),
        q(
            "pt-3",
            SubjectKey::Portugues,
            "Assinale a alternativa com a correta classificação do \"que\":",
            [
                "\"O livro que li é bom\" - conjunção integrante",
                "\"Espero que você venha\" - pronome relativo",
                "\"Que dia lindo!\" - advérbio de intensidade",
                "\"Espero que você venha\" - conjunção integrante",
            ],
            3,
            "Em \"Espero que você venha\", o \"que\" introduz oração subordinada substantiva: conjunção integrante.",
        ),
        q(
            "pt-4",
            SubjectKey::Portugues,
            "A crase está corretamente empregada em:",
            [
                "Refiro-me à você e aos seus amigos.",
                "Chegaremos à Brasília amanhã cedo.",
                "Dedicou-se à música desde criança.",
                "Fui à pé até a escola.",
            ],
            2,
            "\"Dedicar-se a algo\": preposição \"a\" + artigo \"a\" antes de \"música\" = crase obrigatória.",
        ),
        q(
            "pt-5",
            SubjectKey::Portugues,
            "Assinale a alternativa que apresenta um período composto por subordinação:",
            [
                "Estudei muito, porém não passei.",
                "Quando cheguei, todos já haviam saído.",
                "O dia amanheceu e eu acordei.",
                "Ou você estuda, ou você trabalha.",
            ],
            1,
            "\"Quando cheguei\" é oração subordinada adverbial temporal.",
        ),
        q(
            "pt-6",
            SubjectKey::Portugues,
            "O plural de \"cidadão\" e \"alemão\" é, respectivamente:",
            [
                "cidadãos - alemãos",
                "cidadões - alemães",
                "cidadãos - alemães",
                "cidadões - alemãos",
            ],
            2,
            "Cidadão faz plural em -ãos (cidadãos). Alemão faz plural em -ães (alemães).",
        ),
        q(
            "pt-7",
            SubjectKey::Portugues,
            "Assinale a alternativa em que a regência verbal está CORRETA:",
            [
                "Assisti o filme ontem à noite.",
                "Prefiro mais cinema do que teatro.",
                "Obedeceu ao regulamento do concurso.",
                "Visou o cargo de analista.",
            ],
            2,
            "\"Obedecer\" é transitivo indireto e exige a preposição \"a\": obedecer ao regulamento.",
        ),
        q(
            "pt-8",
            SubjectKey::Portugues,
            "A vírgula está empregada INCORRETAMENTE em:",
            [
                "Maria, traga os documentos.",
                "O candidato, que estudou, foi aprovado.",
                "Os candidatos aprovados, receberam a convocação.",
                "Estudou muito; foi, portanto, aprovado.",
            ],
            2,
            "Não se separa sujeito do predicado por vírgula: \"Os candidatos aprovados receberam...\".",
        ),
        q(
            "pt-9",
            SubjectKey::Portugues,
            "Assinale a palavra acentuada pela mesma regra de \"saúde\":",
            ["Café", "Faísca", "Órgão", "Táxi"],
            1,
            "\"Saúde\" e \"faísca\" têm hiato com \"i\"/\"u\" tônicos, acentuados pela regra do hiato.",
        ),
        q(
            "pt-10",
            SubjectKey::Portugues,
            "Em \"Entregou-lhe o edital\", o pronome \"lhe\" exerce função de:",
            [
                "Objeto direto",
                "Objeto indireto",
                "Sujeito",
                "Complemento nominal",
            ],
            1,
            "\"Lhe\" substitui \"a ele/a ela\" e completa o verbo \"entregar\" como objeto indireto.",
        ),
        // ─── Matemática ─────────────────────────────────────────────────
        q(
            "mt-1",
            SubjectKey::Matematica,
            "Uma mercadoria custa R$ 80,00 e sofre um aumento de 15%. Qual o novo preço?",
            ["R$ 88,00", "R$ 92,00", "R$ 95,00", "R$ 96,00"],
            1,
            "15% de 80 = 12. Novo preço: 80 + 12 = R$ 92,00.",
        ),
        q(
            "mt-2",
            SubjectKey::Matematica,
            "Se 6 máquinas produzem 420 peças em um dia, quantas peças produzem 10 máquinas no mesmo período?",
            ["600", "640", "700", "720"],
            2,
            "Regra de três simples: 420/6 = 70 peças por máquina; 70 × 10 = 700.",
        ),
        q(
            "mt-3",
            SubjectKey::Matematica,
            "A razão entre 18 e 24, na forma irredutível, é:",
            ["3/4", "2/3", "4/5", "6/8"],
            0,
            "Dividindo ambos por 6: 18/24 = 3/4.",
        ),
        q(
            "mt-4",
            SubjectKey::Matematica,
            "Qual é o valor de x na equação 3x - 7 = 2x + 5?",
            ["10", "11", "12", "13"],
            2,
            "3x - 2x = 5 + 7, logo x = 12.",
        ),
        q(
            "mt-5",
            SubjectKey::Matematica,
            "A média aritmética das notas 6, 8 e 10 é:",
            ["7", "7,5", "8", "8,5"],
            2,
            "(6 + 8 + 10) / 3 = 24 / 3 = 8.",
        ),
        // ─── Raciocínio Lógico ──────────────────────────────────────────
        q(
            "lg-1",
            SubjectKey::Logica,
            "Se todo A é B e algum B é C, pode-se concluir que:",
            [
                "Todo A é C",
                "Algum A é C",
                "Nenhum A é C",
                "Nada se pode concluir sobre A e C",
            ],
            3,
            "A interseção entre B e C pode não alcançar A; o silogismo é inválido.",
        ),
        q(
            "lg-2",
            SubjectKey::Logica,
            "A negação de \"Todos os candidatos estudam\" é:",
            [
                "Nenhum candidato estuda",
                "Algum candidato não estuda",
                "Todos os candidatos não estudam",
                "Algum candidato estuda",
            ],
            1,
            "A negação do quantificador universal é o existencial negado: algum candidato não estuda.",
        ),
        q(
            "lg-3",
            SubjectKey::Logica,
            "Na sequência 2, 6, 12, 20, 30, o próximo termo é:",
            ["40", "42", "44", "46"],
            1,
            "As diferenças crescem de 2 em 2 (4, 6, 8, 10, 12): 30 + 12 = 42.",
        ),
        q(
            "lg-4",
            SubjectKey::Logica,
            "A proposição \"Se chove, então a rua molha\" é FALSA quando:",
            [
                "Chove e a rua molha",
                "Não chove e a rua molha",
                "Chove e a rua não molha",
                "Não chove e a rua não molha",
            ],
            2,
            "Uma condicional só é falsa com antecedente verdadeiro e consequente falso.",
        ),
        // ─── Direito Constitucional ─────────────────────────────────────
        q(
            "ct-1",
            SubjectKey::Constitucional,
            "São Poderes da União, independentes e harmônicos entre si:",
            [
                "Executivo, Legislativo e Ministério Público",
                "Legislativo, Executivo e Judiciário",
                "Judiciário, Defensoria e Executivo",
                "Legislativo, Judiciário e Tribunal de Contas",
            ],
            1,
            "Art. 2º da CF/88: Legislativo, Executivo e Judiciário.",
        ),
        q(
            "ct-2",
            SubjectKey::Constitucional,
            "O habeas corpus é cabível quando alguém sofre ou se acha ameaçado de sofrer violência ou coação em sua:",
            [
                "Liberdade de expressão",
                "Liberdade de locomoção",
                "Intimidade",
                "Propriedade",
            ],
            1,
            "Art. 5º, LXVIII: o habeas corpus protege a liberdade de locomoção.",
        ),
        q(
            "ct-3",
            SubjectKey::Constitucional,
            "Constituem objetivos fundamentais da República, EXCETO:",
            [
                "Construir uma sociedade livre, justa e solidária",
                "Garantir o desenvolvimento nacional",
                "Erradicar a pobreza e a marginalização",
                "Assegurar a soberania dos Estados-membros",
            ],
            3,
            "Art. 3º da CF/88 não menciona soberania estadual; soberania é fundamento da União (art. 1º).",
        ),
        // ─── Direito Administrativo ─────────────────────────────────────
        q(
            "ad-1",
            SubjectKey::Administrativo,
            "São princípios expressos da Administração Pública no art. 37 da CF/88:",
            [
                "Legalidade, impessoalidade, moralidade, publicidade e eficiência",
                "Legalidade, proporcionalidade, motivação, publicidade e eficiência",
                "Supremacia, impessoalidade, moralidade, economicidade e eficiência",
                "Legalidade, razoabilidade, moralidade, publicidade e continuidade",
            ],
            0,
            "O caput do art. 37 traz o rol LIMPE: legalidade, impessoalidade, moralidade, publicidade e eficiência.",
        ),
        q(
            "ad-2",
            SubjectKey::Administrativo,
            "O atributo do ato administrativo que permite sua execução imediata, sem ordem judicial, é a:",
            ["Presunção de legitimidade", "Imperatividade", "Autoexecutoriedade", "Tipicidade"],
            2,
            "A autoexecutoriedade autoriza a Administração a executar seus atos sem intervenção prévia do Judiciário.",
        ),
        q(
            "ad-3",
            SubjectKey::Administrativo,
            "A anulação de um ato administrativo decorre de:",
            [
                "Conveniência e oportunidade",
                "Vício de legalidade",
                "Interesse público superveniente",
                "Caducidade do ato",
            ],
            1,
            "Anula-se ato ilegal; revoga-se ato legal por conveniência e oportunidade (Súmula 473 do STF).",
        ),
        // ─── Noções de Informática ──────────────────────────────────────
        q(
            "in-1",
            SubjectKey::Informatica,
            "No Windows, a combinação de teclas que alterna entre janelas abertas é:",
            ["Ctrl + C", "Alt + Tab", "Ctrl + Alt + Del", "Shift + F10"],
            1,
            "Alt + Tab alterna entre as janelas abertas.",
        ),
        q(
            "in-2",
            SubjectKey::Informatica,
            "Um programa que se propaga automaticamente pela rede, sem depender de hospedeiro, é um:",
            ["Vírus", "Worm", "Trojan", "Spyware"],
            1,
            "O worm se replica sozinho pela rede; o vírus depende de um arquivo hospedeiro.",
        ),
        q(
            "in-3",
            SubjectKey::Informatica,
            "O protocolo padrão para navegação segura na web é o:",
            ["FTP", "HTTP", "HTTPS", "SMTP"],
            2,
            "HTTPS acrescenta criptografia TLS ao HTTP.",
        ),
        // ─── Atualidades ────────────────────────────────────────────────
        q(
            "at-1",
            SubjectKey::Atualidades,
            "A sigla LGPD refere-se à lei brasileira que disciplina:",
            [
                "O trabalho remoto",
                "A proteção de dados pessoais",
                "As licitações públicas",
                "O mercado de capitais",
            ],
            1,
            "A Lei Geral de Proteção de Dados (Lei 13.709/2018) regula o tratamento de dados pessoais.",
        ),
        q(
            "at-2",
            SubjectKey::Atualidades,
            "O sistema de pagamentos instantâneos criado pelo Banco Central do Brasil é o:",
            ["TED", "DOC", "Pix", "Boleto Digital"],
            2,
            "O Pix realiza transferências instantâneas, disponíveis a qualquer hora.",
        ),
        // ─── Ética no Serviço Público ───────────────────────────────────
        q(
            "et-1",
            SubjectKey::Etica,
            "Segundo o Decreto 1.171/94, o servidor público deve tratar os usuários do serviço com:",
            ["Formalidade e distanciamento", "Cortesia e urbanidade", "Rigidez e hierarquia", "Discrição e sigilo absoluto"],
            1,
            "O Código de Ética impõe cortesia, urbanidade e disponibilidade no atendimento.",
        ),
        q(
            "et-2",
            SubjectKey::Etica,
            "Configura ato de improbidade administrativa que causa prejuízo ao erário:",
            [
                "Atraso injustificado em processo",
                "Permitir a utilização indevida de bens públicos",
                "Exercer atividade privada lícita fora do expediente",
                "Recusar-se a receber presentes",
            ],
            1,
            "Facilitar ou permitir uso indevido de bens públicos lesa o erário (Lei 8.429/92, art. 10).",
        ),
    ]
}

/// The built-in lesson-video catalog.
#[must_use]
pub fn videos() -> Vec<Video> {
    vec![
        Video::new(
            VideoId::new("pt-video-1"),
            SubjectKey::Portugues,
            "Gramática Portuguesa - Aula 1",
            "Fundamentos da gramática com foco em concordância verbal e nominal.",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            900,
        ),
        Video::new(
            VideoId::new("mt-video-1"),
            SubjectKey::Matematica,
            "Álgebra - Equações do 1º Grau",
            "Como resolver equações do primeiro grau com exemplos práticos.",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            1200,
        ),
        Video::new(
            VideoId::new("ct-video-1"),
            SubjectKey::Constitucional,
            "Direitos Fundamentais - Aula 1",
            "Introdução aos direitos fundamentais na Constituição Federal.",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            1500,
        ),
        Video::new(
            VideoId::new("lg-video-1"),
            SubjectKey::Logica,
            "Lógica Proposicional - Introdução",
            "Conceitos básicos de lógica proposicional para concursos.",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            1050,
        ),
    ]
}
