use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > 100 {
            return Err("page_size must be between 1 and 100".to_string());
        }
        Ok(())
    }

    /// Number of items before the page. Saturates instead of wrapping for huge pages.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)).saturating_mul(u64::from(self.page_size))
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

/// Slice an already produced sequence into the requested page, keeping its order.
pub fn paginate<T>(items: Vec<T>, params: &PaginationParams) -> PaginatedResponse<T> {
    let total_items = items.len() as i64;
    let data = items
        .into_iter()
        .skip(usize::try_from(params.offset()).unwrap_or(usize::MAX))
        .take(params.limit() as usize)
        .collect();

    PaginatedResponse::new(data, params.page, params.page_size, total_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, page_size: u32) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 50);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_params() {
        assert!(params(0, 10).validate().is_err());
        assert!(params(1, 0).validate().is_err());
        assert!(params(1, 101).validate().is_err());
    }

    #[test]
    fn slices_in_order_with_metadata() {
        let page = paginate((1..=7).collect::<Vec<_>>(), &params(2, 3));

        assert_eq!(page.data, vec![4, 5, 6]);
        assert_eq!(page.pagination.total_items, 7);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let far = params(50_000_000, 100);
        assert!(far.validate().is_ok());
        assert_eq!(far.offset(), 4_999_999_900);

        let page = paginate(vec![1, 2, 3], &far);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 3);

        let last = params(u32::MAX, 100);
        assert_eq!(last.offset(), u64::from(u32::MAX - 1) * 100);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(vec!["a", "b"], &params(5, 10));

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 2);
        assert_eq!(page.pagination.total_pages, 1);
    }
}
