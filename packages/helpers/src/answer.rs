use cosmwasm_std::{Attribute, Event, Response};

pub fn response<A: Into<Attribute>, T>(
    ty: &str,
    contract_name: &str,
    attrs: impl IntoIterator<Item = A>,
) -> Response<T> {
    Response::<T>::new()
        .add_event(Event::new(format!("{}-{}", contract_name, ty)).add_attributes(attrs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_event_name() {
        let res: Response = response("execute-withdraw", "registry", [("account", "alice")]);
        assert_eq!(
            res.events,
            vec![Event::new("registry-execute-withdraw").add_attribute("account", "alice")]
        );
        assert!(res.attributes.is_empty());
    }
}
