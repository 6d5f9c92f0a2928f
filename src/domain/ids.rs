use crate::uuid_id;

uuid_id!(SessionId);
uuid_id!(CheckoutId);
uuid_id!(ProductId);
