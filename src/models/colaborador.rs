use super::Entity;

/// Colaborador del pátio
#[derive(Debug, Clone, PartialEq)]
pub struct Colaborador {
    pub id: i32,
    pub nome: String,
    pub cargo: String,
}

#[derive(Debug, Clone)]
pub struct NewColaborador {
    pub nome: String,
    pub cargo: String,
}

impl Entity for Colaborador {
    type Draft = NewColaborador;

    const RESOURCE: &'static str = "colaboradores";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewColaborador) -> Self {
        Self {
            id,
            nome: draft.nome,
            cargo: draft.cargo,
        }
    }
}
