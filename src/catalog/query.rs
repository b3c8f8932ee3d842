use super::collation::NameCollator;
use crate::domain::{Product, QueryParams, SortOption};

/// A predicate over catalog entries.
pub type ProductFilter<'a> = Box<dyn Fn(&Product) -> bool + Send + Sync + 'a>;

/// Ordered filters followed by a sort.
///
/// Filters run in the order they were added and every one of them must keep a
/// product for it to reach the result. The input catalog is never modified;
/// the result holds copies of the matching products.
pub struct QueryPipeline<'a> {
    filters: Vec<ProductFilter<'a>>,
    sort_option: SortOption,
}

impl<'a> QueryPipeline<'a> {
    pub fn new(sort_option: SortOption) -> Self {
        Self {
            filters: Vec::new(),
            sort_option,
        }
    }

    /// Builds the storefront pipeline: search term, then stock (if requested),
    /// then sort.
    pub fn from_params(params: &QueryParams) -> Self {
        let pipeline = Self::new(params.sort_option).filter(matches_search(&params.search_term));
        if params.in_stock_only {
            pipeline.filter(Product::in_stock)
        } else {
            pipeline
        }
    }

    /// Appends a filter. It runs after every filter already in the pipeline.
    pub fn filter(mut self, predicate: impl Fn(&Product) -> bool + Send + Sync + 'a) -> Self {
        self.filters.push(Box::new(predicate));
        self
    }

    pub fn run(&self, catalog: &[Product]) -> Vec<Product> {
        let mut products: Vec<Product> = catalog
            .iter()
            .filter(|product| self.filters.iter().all(|keep| keep(product)))
            .cloned()
            .collect();

        sort_products(&mut products, self.sort_option);
        products
    }
}

/// Case-insensitive substring match on the product name. An empty term
/// matches everything.
pub fn matches_search(search_term: &str) -> impl Fn(&Product) -> bool + Send + Sync + 'static {
    let needle = search_term.to_lowercase();
    move |product: &Product| product.name.to_lowercase().contains(&needle)
}

/// Sorts in place. The sort is stable: products with equal keys keep their
/// relative order.
pub fn sort_products(products: &mut [Product], sort_option: SortOption) {
    match sort_option {
        SortOption::NameAsc => {
            let collator = NameCollator::new();
            products.sort_by(|a, b| collator.compare(&a.name, &b.name));
        }
        SortOption::NameDesc => {
            let collator = NameCollator::new();
            products.sort_by(|a, b| collator.compare(&b.name, &a.name));
        }
        SortOption::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::RatingAsc => products.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortOption::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Filters and sorts the catalog for display.
pub fn query(
    catalog: &[Product],
    search_term: &str,
    sort_option: SortOption,
    in_stock_only: bool,
) -> Vec<Product> {
    let params = QueryParams::new(search_term, sort_option, in_stock_only);
    QueryPipeline::from_params(&params).run(catalog)
}

/// Human-readable result count shown above the product list.
pub fn results_text(search_term: &str, count: usize) -> String {
    if search_term.is_empty() {
        return match count {
            1 => "1 Product".to_string(),
            n => format!("{} Products", n),
        };
    }

    match count {
        0 => "No search results found".to_string(),
        1 => "1 Result".to_string(),
        n => format!("{} Results", n),
    }
}
