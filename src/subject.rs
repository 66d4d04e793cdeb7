/// Curricular subjects a study session or mock exam can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    Mathematics,
    Portuguese,
    Physics,
    Chemistry,
    Biology,
    History,
    Geography,
    Philosophy,
    Sociology,
    English,
    Spanish,
    Essay,
    NaturalSciences,
    HumanSciences,
    Languages,
}

impl Subject {
    pub const ALL: [Subject; 15] = [
        Subject::Mathematics,
        Subject::Portuguese,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::History,
        Subject::Geography,
        Subject::Philosophy,
        Subject::Sociology,
        Subject::English,
        Subject::Spanish,
        Subject::Essay,
        Subject::NaturalSciences,
        Subject::HumanSciences,
        Subject::Languages,
    ];

    /// Display label, also used as the stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Matemática",
            Subject::Portuguese => "Português",
            Subject::Physics => "Física",
            Subject::Chemistry => "Química",
            Subject::Biology => "Biologia",
            Subject::History => "História",
            Subject::Geography => "Geografia",
            Subject::Philosophy => "Filosofia",
            Subject::Sociology => "Sociologia",
            Subject::English => "Inglês",
            Subject::Spanish => "Espanhol",
            Subject::Essay => "Redação",
            Subject::NaturalSciences => "Ciências da Natureza",
            Subject::HumanSciences => "Ciências Humanas",
            Subject::Languages => "Linguagens e Códigos",
        }
    }

    pub fn from(s: &str) -> Option<Self> {
        Subject::ALL.into_iter().find(|subject| subject.as_str() == s)
    }
}

/// Ways a student can study a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyMethod {
    VideoLesson,
    InPersonClass,
    Book,
    Exercises,
    Review,
    Summary,
}

impl StudyMethod {
    pub const ALL: [StudyMethod; 6] = [
        StudyMethod::VideoLesson,
        StudyMethod::InPersonClass,
        StudyMethod::Book,
        StudyMethod::Exercises,
        StudyMethod::Review,
        StudyMethod::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyMethod::VideoLesson => "Videoaula",
            StudyMethod::InPersonClass => "Aula presencial",
            StudyMethod::Book => "Livro",
            StudyMethod::Exercises => "Exercícios",
            StudyMethod::Review => "Revisão",
            StudyMethod::Summary => "Resumo",
        }
    }

    pub fn from(s: &str) -> Option<Self> {
        StudyMethod::ALL.into_iter().find(|method| method.as_str() == s)
    }
}
