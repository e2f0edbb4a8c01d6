mod category;
mod customer;
mod customer_customer_demo;
mod customer_demographic;
mod employee;
mod employee_territory;
mod order;
mod order_detail;
mod product;
mod region;
mod shipper;
mod supplier;
mod territory;

pub use category::Category;
pub use customer::Customer;
pub use customer_customer_demo::CustomerCustomerDemo;
pub use customer_demographic::CustomerDemographic;
pub use employee::Employee;
pub use employee_territory::EmployeeTerritory;
pub use order::Order;
pub use order_detail::OrderDetail;
pub use product::Product;
pub use region::Region;
pub use shipper::Shipper;
pub use supplier::Supplier;
pub use territory::Territory;
