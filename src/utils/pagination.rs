//! Utilidades de paginación
//!
//! `?page=&pageSize=` con defaults 1 y 10. El desplazamiento es
//! `(page - 1) * pageSize`; un desplazamiento negativo no salta nada y un
//! `pageSize` menor o igual a cero devuelve una página vacía.

use serde::Deserialize;

use crate::dto::common_dto::PagedResponse;
use crate::models::Entity;
use crate::repositories::Repository;
use crate::utils::errors::AppResult;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Parámetros de query de los listados
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i32,
    pub page_size: i32,
}

impl PageRequest {
    /// Resolver defaults y, si hay `max_page_size`, recortar el tamaño de página
    pub fn from_params(params: &PaginationParams, max_page_size: Option<i32>) -> Self {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let mut page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if let Some(max) = max_page_size {
            page_size = page_size.min(max);
        }

        Self { page, page_size }
    }

    pub fn skip(&self) -> usize {
        let offset = (i64::from(self.page) - 1) * i64::from(self.page_size);
        usize::try_from(offset.max(0)).unwrap_or(usize::MAX)
    }

    pub fn take(&self) -> usize {
        usize::try_from(self.page_size.max(0)).unwrap_or(0)
    }
}

/// Leer una página del repositorio y convertir cada entidad a su response
pub async fn paginate<E, R>(
    repository: &dyn Repository<E>,
    request: PageRequest,
) -> AppResult<PagedResponse<R>>
where
    E: Entity,
    R: From<E>,
{
    let (items, total_count) = repository.find_page(request.skip(), request.take()).await?;

    Ok(PagedResponse {
        data: items.into_iter().map(R::from).collect(),
        total_count,
        page: request.page,
        page_size: request.page_size,
    })
}
