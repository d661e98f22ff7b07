//! Text shown to the user. The backend speaks French, so does the client.

pub const ERROR_PREFIX: &str = "Erreur: ";
pub const SCAN_FAILED: &str = "Erreur lors du scan";
pub const DELETE_FAILED: &str = "Erreur lors de la suppression";
pub const LISTING_FAILED: &str = "Erreur lors du chargement de la liste";
pub const UNREACHABLE: &str =
    "Impossible de se connecter au serveur. Vérifiez que le backend est lancé.";

pub const NOTHING_TO_EXPORT: &str = "Aucun scan à exporter";
pub const EXPORT_PENDING: &str = "Export PDF en cours de développement...";
pub const SCAN_DELETED: &str = "Scan supprimé";

pub const PLACEHOLDER_TITLE: &str = "Aucun module exécuté pour le moment.";
pub const PLACEHOLDER_NOTE: &str = "Le scan est en cours de développement.";

pub const PLATFORM_LABEL: &str = "Plateforme: ";
pub const RECOMMENDATIONS_LABEL: &str = "Recommandations:";

pub const BACKEND_HINT: &str = "Start the backend with: cd backend && python main.py";
