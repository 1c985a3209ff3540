use sea_orm::DatabaseConnection;
use service::{CargoService, DeliveryService, TenderService};

/// Services shared by all handlers. Each holds a handle to the same pool.
#[derive(Clone)]
pub struct ServerState {
    pub tenders: TenderService,
    pub deliveries: DeliveryService,
    pub cargo: CargoService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            tenders: TenderService::new(db.clone()),
            deliveries: DeliveryService::new(db.clone()),
            cargo: CargoService::new(db),
        }
    }
}
