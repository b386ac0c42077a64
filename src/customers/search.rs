use crate::db::Customer;

/// Whether `customer` matches the search term
///
/// Matches on the name (case-insensitive) or on the decimal rendering of
/// the mobile number. An empty term matches everything.
pub fn matches_search(customer: &Customer, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    customer.customer_name.to_lowercase().contains(&needle)
        || customer.mobile_number.to_string().contains(&needle)
}

/// Customers matching `term`, in their original order
pub fn filter_customers<'a>(customers: &'a [Customer], term: &str) -> Vec<&'a Customer> {
    customers
        .iter()
        .filter(|customer| matches_search(customer, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn customer(id: i64, name: &str, mobile: i64) -> Customer {
        Customer {
            id,
            customer_name: name.to_string(),
            mobile_number: mobile,
            line_type: 140,
            charging_date: None,
            arrival_time: None,
            provider: None,
            ownership: None,
            payment_status: "دفع".to_string(),
            monthly_price: None,
            renewal_status: "تم".to_string(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ids(found: Vec<&Customer>) -> Vec<i64> {
        found.iter().map(|c| c.id).collect()
    }

    #[test]
    fn empty_term_keeps_everything() {
        let customers = vec![customer(1, "Ahmed", 201001112222), customer(2, "Sara", 201112223333)];
        assert_eq!(ids(filter_customers(&customers, "")), vec![1, 2]);
    }

    #[test]
    fn name_match_ignores_case() {
        let customers = vec![
            customer(1, "Ahmed Ali", 201001112222),
            customer(2, "Sara", 201112223333),
            customer(3, "AHMAD", 201223334444),
        ];
        assert_eq!(ids(filter_customers(&customers, "ahm")), vec![1, 3]);
        assert_eq!(ids(filter_customers(&customers, "SARA")), vec![2]);
    }

    #[test]
    fn arabic_names_match() {
        let customers = vec![customer(1, "محمد حسن", 201001112222), customer(2, "منى", 201112223333)];
        assert_eq!(ids(filter_customers(&customers, "حسن")), vec![1]);
    }

    #[test]
    fn mobile_number_substring_matches() {
        let customers = vec![
            customer(1, "Ahmed", 201001112222),
            customer(2, "Sara", 201112223333),
            customer(3, "Omar", 201550100999),
        ];
        assert_eq!(ids(filter_customers(&customers, "0100")), vec![1, 3]);
        assert_eq!(ids(filter_customers(&customers, "2233")), vec![2]);
    }

    #[test]
    fn no_match_is_empty() {
        let customers = vec![customer(1, "Ahmed", 201001112222)];
        assert!(filter_customers(&customers, "zzz").is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_subset() {
        let customers = vec![
            customer(1, "Nour", 201001234567),
            customer(2, "Hana", 201007654321),
            customer(3, "Nada", 201551234567),
            customer(4, "Youssef", 201220000000),
        ];

        for term in ["", "n", "NA", "1234", "0100", "y", "x", "2012"] {
            let found = filter_customers(&customers, term);
            let expected: Vec<i64> = customers
                .iter()
                .filter(|c| {
                    c.customer_name.to_lowercase().contains(&term.to_lowercase())
                        || c.mobile_number.to_string().contains(term)
                })
                .map(|c| c.id)
                .collect();
            assert_eq!(ids(found), expected, "term {:?}", term);
        }
    }
}
