mod common;
pub use self::common::{Filter, FilterSet, Query, QueryParameters};

mod product;
pub use self::product::ProductQuery;

mod purchase;
pub use self::purchase::{PurchaseFilter, PurchaseQuery};

mod customer;
pub use self::customer::{CustomerFilter, CustomerQuery};

mod subscriber;
pub use self::subscriber::{SubscriberQuery, SubscriberTarget};
